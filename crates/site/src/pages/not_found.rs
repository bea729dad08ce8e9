use maud::{Markup, html};

use crate::layouts::{PageContext, site_layout};

/// 404 page.
pub fn not_found_page(ctx: &PageContext) -> Markup {
    site_layout(
        "Not Found",
        ctx,
        html! {
            section class="container narrow" {
                h1 { "Page not found" }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}
