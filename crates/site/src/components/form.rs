use maud::{Markup, html};
use trekway_domain::FieldErrors;

/// Single-line input with its label and inline error.
pub fn text_input(
    name: &str,
    label: &str,
    kind: &str,
    value: &str,
    errors: &FieldErrors,
) -> Markup {
    let error = errors.get(name);
    html! {
        div class="field" {
            label for=(name) { (label) }
            input
                type=(kind)
                id=(name)
                name=(name)
                value=(value)
                aria-invalid=[error.map(|_| "true")];
            (field_error(error))
        }
    }
}

/// Multi-line input with its label and inline error.
pub fn text_area(name: &str, label: &str, value: &str, errors: &FieldErrors) -> Markup {
    let error = errors.get(name);
    html! {
        div class="field" {
            label for=(name) { (label) }
            textarea id=(name) name=(name) rows="5" aria-invalid=[error.map(|_| "true")] { (value) }
            (field_error(error))
        }
    }
}

/// Inline message under a field.
pub fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            p class="field-error" role="alert" { (message) }
        }
    }
}

/// Banner above a form after a failed submission.
pub fn general_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            div class="alert alert-error" role="alert" { (message) }
        }
    }
}

/// Submit button, disabled while a submission is in flight.
pub fn submit_button(label: &str, busy_label: &str, busy: bool) -> Markup {
    html! {
        button type="submit" class="btn btn-primary" disabled[busy] {
            @if busy { (busy_label) } @else { (label) }
        }
    }
}
