use maud::{Markup, html};

use crate::layouts::{PageContext, site_layout};

/// Where an invalid session is sent.
pub fn login_page(ctx: &PageContext) -> Markup {
    site_layout(
        "Sign in",
        ctx,
        html! {
            section class="container narrow" id="login" {
                h1 { "Sign in" }
                p class="lead" { "Your session has ended. Please sign in again to continue." }
                a class="btn btn-primary" href="/" { "Back to home" }
            }
        },
    )
}
