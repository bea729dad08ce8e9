use maud::{Markup, html};
use trekway_application::FormState;
use trekway_domain::ContactFormValues;
use trekway_domain::content::CONTACT;

use crate::components::{general_error, submit_button, text_area, text_input};
use crate::layouts::{PageContext, site_layout};

/// Contact page: the enquiry form next to the office details and map.
pub fn contact_page(ctx: &PageContext, form: &FormState<ContactFormValues>) -> Markup {
    let values = &form.values;
    let errors = &form.field_errors;

    site_layout(
        "Contact Us",
        ctx,
        html! {
            section class="contact container" id="contact" {
                div class="contact-intro" {
                    h1 { "Get in touch" }
                    p class="lead" { "Questions about a trek or a tour? Send us a message and our team will reply shortly." }
                    ul class="contact-details" {
                        li { span class="icon icon-phone" aria-hidden="true" {} a href=(CONTACT.phone_href()) { (CONTACT.phone) } }
                        li { span class="icon icon-mail" aria-hidden="true" {} a href=(format!("mailto:{}", CONTACT.email)) { (CONTACT.email) } }
                        li { span class="icon icon-clock" aria-hidden="true" {} (CONTACT.hours) }
                        li { span class="icon icon-map-pin" aria-hidden="true" {} (CONTACT.address) }
                    }
                }
                form class="contact-form" method="post" action="/contact" novalidate {
                    (general_error(form.general_error.as_deref()))
                    (text_input("name", "Name", "text", &values.name, errors))
                    (text_input("email", "Email", "email", &values.email, errors))
                    (text_input("phone", "Phone (optional)", "tel", &values.phone, errors))
                    (text_area("message", "Message", &values.message, errors))
                    (submit_button("Send Message", "Sending...", form.busy))
                }
                iframe class="map" src=(CONTACT.map_url) title="Office location" loading="lazy" {}
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use trekway_domain::FieldErrors;

    #[test]
    fn test_empty_form() {
        let html = contact_page(&PageContext::default(), &FormState::default()).into_string();

        assert!(html.contains(r#"action="/contact""#));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("alert-error"));
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_failed_submission_keeps_values_and_shows_errors() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Invalid");
        let form = FormState {
            values: ContactFormValues {
                name: "Pemba".to_string(),
                email: "pemba@".to_string(),
                phone: String::new(),
                message: "Need a guide for Langtang".to_string(),
            },
            field_errors: errors,
            general_error: Some("Validation failed".to_string()),
            busy: false,
        };

        let html = contact_page(&PageContext::default(), &form).into_string();

        assert!(html.contains(r#"value="Pemba""#));
        assert!(html.contains("Need a guide for Langtang"));
        assert!(html.contains(r#"<p class="field-error" role="alert">Invalid</p>"#));
        assert!(html.contains(r#"<div class="alert alert-error" role="alert">Validation failed</div>"#));
    }

    #[test]
    fn test_busy_form_disables_submit() {
        let form = FormState::<ContactFormValues> {
            busy: true,
            ..FormState::default()
        };
        let html = contact_page(&PageContext::default(), &form).into_string();
        assert!(html.contains("Sending..."));
        assert!(html.contains("disabled"));
    }
}
