use maud::{DOCTYPE, Markup, html};
use trekway_application::FormState;
use trekway_domain::{SubscriberFormValues, ToastPresentation};

use crate::components::{footer, navbar, toast_stack};

/// What every page shows besides its own content.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Toasts raised while handling the request.
    pub toasts: Vec<ToastPresentation>,
    /// State of the footer newsletter form.
    pub newsletter: FormState<SubscriberFormValues>,
}

/// Wraps page content with the head, navbar, footer and toasts.
pub fn site_layout(title: &str, ctx: &PageContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Trekway" }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/carousel.js" defer {}
            }
            body {
                (navbar())
                main { (content) }
                (footer(&ctx.newsletter))
                (toast_stack(&ctx.toasts))
            }
        }
    }
}
