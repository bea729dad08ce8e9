use maud::{Markup, html};
use trekway_application::FormState;
use trekway_domain::SubscriberFormValues;
use trekway_domain::content::{CONTACT, FOOTER_COLUMNS};

use super::{field_error, submit_button};

/// Footer with link columns, contact details and the newsletter form.
pub fn footer(newsletter: &FormState<SubscriberFormValues>) -> Markup {
    html! {
        footer class="footer" {
            div class="footer-columns" {
                @for column in FOOTER_COLUMNS {
                    div class="footer-column" {
                        h4 { (column.title) }
                        ul {
                            @for link in column.links {
                                li { a href=(link.href) { (link.label) } }
                            }
                        }
                    }
                }
                div class="footer-column" {
                    h4 { "Contact" }
                    p { a href=(CONTACT.phone_href()) { (CONTACT.phone) } }
                    p { a href=(format!("mailto:{}", CONTACT.email)) { (CONTACT.email) } }
                    p { (CONTACT.address) }
                }
            }
            form class="newsletter" method="post" action="/subscribe" {
                h4 { "Subscribe to our newsletter" }
                label class="sr-only" for="newsletter-email" { "Email address" }
                input
                    type="email"
                    id="newsletter-email"
                    name="email"
                    placeholder="you@example.com"
                    value=(newsletter.values.email);
                (submit_button("Subscribe", "Subscribing...", newsletter.busy))
                (field_error(newsletter.field_errors.get("email")))
            }
        }
    }
}
