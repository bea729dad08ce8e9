use maud::{Markup, html};
use trekway_domain::ToastPresentation;

/// Renders queued toasts, oldest first.
pub fn toast_stack(toasts: &[ToastPresentation]) -> Markup {
    html! {
        div class="toaster" aria-live="polite" {
            @for toast in toasts {
                div
                    class=(format!("toast toast-{}", toast.variant))
                    role="status"
                    data-position=(toast.position.as_str())
                    data-duration=(toast.duration_ms)
                {
                    span class=(format!("icon icon-{}", toast.icon.name())) aria-hidden="true" {}
                    div class="toast-body" {
                        p class="toast-message" { (toast.message) }
                        @if let Some(description) = &toast.description {
                            p class="toast-description" { (description) }
                        }
                    }
                }
            }
        }
    }
}
