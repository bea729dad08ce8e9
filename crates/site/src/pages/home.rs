use maud::{Markup, html};
use trekway_application::FormState;
use trekway_domain::content::{
    BLOG_POSTS, DESTINATION_CARDS, EXPEDITION_TREKS, FAQS, HERITAGE_TRAILS, HERO_SLIDES, SERVICES,
    TESTIMONIALS, TileSize,
};
use trekway_domain::{Autoplay, Carousel, ReviewFormValues};

use crate::components::{carousel, field_error, general_error, stars, submit_button, text_area};
use crate::layouts::{PageContext, site_layout};

/// Landing page.
pub fn home_page(ctx: &PageContext, review: &FormState<ReviewFormValues>) -> Markup {
    site_layout(
        "Explore Nepal",
        ctx,
        html! {
            (hero())
            (destinations())
            (expeditions())
            (heritage())
            (why_us())
            (testimonials())
            (blogs())
            (faq(review))
            (call_to_action())
        },
    )
}

fn hero() -> Markup {
    let state = Carousel::new(HERO_SLIDES.len())
        .with_loop(true)
        .with_autoplay(Autoplay::default());
    let slides = HERO_SLIDES
        .iter()
        .map(|slide| {
            html! {
                img src=(slide.image) alt=(slide.title);
                h2 class="hero-title" { (slide.title) }
            }
        })
        .collect();

    html! {
        section class="hero" id="home" {
            div class="hero-copy" {
                h1 { "Explore the Himalayas with local experts" }
                p { "Treks, tours and heritage walks across Nepal, planned end to end." }
                a class="btn btn-primary" href="#expeditions" { "Find your trek" }
            }
            (carousel("hero-carousel", &state, slides))
        }
    }
}

fn destinations() -> Markup {
    html! {
        section class="destinations" id="destinations" {
            h2 { "Popular Destinations" }
            div class="grid" {
                @for card in DESTINATION_CARDS {
                    article class="destination-card" style=(format!("background-image:url('{}')", card.image)) {
                        h3 { (card.title) }
                        p { (card.description) }
                        @if card.cta {
                            a class="btn btn-light" href="/contact" { "Plan a trip" }
                        }
                    }
                }
            }
        }
    }
}

fn expeditions() -> Markup {
    let state = Carousel::new(EXPEDITION_TREKS.len());
    let slides = EXPEDITION_TREKS
        .iter()
        .map(|trek| {
            html! {
                article class="trek-card" {
                    img src=(trek.image) alt=(trek.title);
                    div class="trek-body" {
                        h3 { (trek.title) }
                        p class="price" { (trek.price_label()) }
                        p { (trek.description) }
                        ul class="trek-facts" {
                            li { (trek.difficulty.label()) }
                            li { (trek.duration_label()) }
                            li { (trek.altitude_label()) }
                        }
                    }
                }
            }
        })
        .collect();

    html! {
        section class="expeditions" id="expeditions" {
            h2 { "Expeditions" }
            (carousel("trek-carousel", &state, slides))
        }
    }
}

fn heritage() -> Markup {
    html! {
        section class="heritage" id="heritage" {
            h2 { "Heritage Trails" }
            div class="grid" {
                @for trail in HERITAGE_TRAILS {
                    article class="trail-card" {
                        img src=(trail.image) alt=(trail.title);
                        h3 { (trail.title) }
                        p { (trail.description) }
                    }
                }
            }
        }
    }
}

fn why_us() -> Markup {
    html! {
        section class="why-us" id="services" {
            h2 { "Why travel with us" }
            div class="grid" {
                @for service in SERVICES {
                    a class="service-card" href=(service.link) {
                        span class=(format!("icon icon-{}", service.icon)) aria-hidden="true" {}
                        h3 { (service.title) }
                        p { (service.description) }
                    }
                }
            }
        }
    }
}

fn testimonials() -> Markup {
    let state = Carousel::new(TESTIMONIALS.len())
        .with_loop(true)
        .with_autoplay(Autoplay::with_delay(5_000));
    let slides = TESTIMONIALS
        .iter()
        .map(|t| {
            html! {
                figure class="testimonial" {
                    img src=(t.image) alt=(t.name);
                    (stars(t.rating))
                    blockquote { (t.text) }
                    figcaption { strong { (t.name) } ", " (t.country) }
                }
            }
        })
        .collect();

    html! {
        section class="testimonials" id="testimonials" {
            h2 { "What our travellers say" }
            (carousel("testimonial-carousel", &state, slides))
        }
    }
}

fn blogs() -> Markup {
    html! {
        section class="blogs" id="blogs" {
            h2 { "From the blog" }
            div class="masonry" {
                @for post in BLOG_POSTS {
                    article class=(match post.size { TileSize::Large => "blog-tile large", TileSize::Small => "blog-tile small" }) {
                        img src=(post.image) alt=(post.title);
                        h3 { (post.title) }
                        p { (post.description) }
                        p class="byline" {
                            img class="avatar" src=(post.author.avatar) alt=(post.author.name);
                            (post.author.name) " · " time { (post.date_label()) }
                        }
                    }
                }
            }
        }
    }
}

fn faq(review: &FormState<ReviewFormValues>) -> Markup {
    html! {
        section class="faq" id="faq" {
            div class="faq-list" {
                h2 { "Frequently asked questions" }
                @for item in FAQS {
                    details {
                        summary { (item.question) }
                        p { (item.answer) }
                    }
                }
            }
            (review_form(review))
        }
    }
}

fn review_form(state: &FormState<ReviewFormValues>) -> Markup {
    html! {
        form class="review-form" method="post" action="/review" {
            h3 { "Leave us a review" }
            (general_error(state.general_error.as_deref()))
            fieldset class="rating-input" {
                legend { "Your rating" }
                @for value in 1..=5u8 {
                    label {
                        input type="radio" name="rating" value=(value) checked[state.values.rating == value];
                        (value)
                    }
                }
                (field_error(state.field_errors.get("rating")))
            }
            (text_area("review", "Your review", &state.values.review, &state.field_errors))
            (submit_button("Submit review", "Submitting...", state.busy))
        }
    }
}

fn call_to_action() -> Markup {
    html! {
        section class="cta" {
            h2 { "Ready for your next adventure?" }
            p { "Tell us where you want to go and we will plan the rest." }
            a class="btn btn-primary" href="/contact" { "Get in touch" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trekway_domain::{FieldErrors, ToastRequest};

    #[test]
    fn test_home_renders_catalog() {
        let html = home_page(&PageContext::default(), &FormState::default()).into_string();

        assert!(html.contains("Everest Base Camp"));
        assert!(html.contains("Rs 10,000"));
        assert!(html.contains(r#"data-autoplay-delay="3000""#));
        assert!(html.contains(r#"data-stop-on-interaction="false""#));
        assert!(html.contains(r#"id="hero-carousel" data-active="0" data-loop="true""#));
        assert!(html.contains(r#"action="/review""#));
        assert!(html.contains(r#"action="/subscribe""#));
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_review_errors_and_toasts_are_shown() {
        let mut errors = FieldErrors::new();
        errors.add("rating", "Please provide a rating");
        let review = FormState {
            values: ReviewFormValues {
                rating: 0,
                review: "<b>short</b>".to_string(),
            },
            field_errors: errors,
            general_error: None,
            busy: false,
        };
        let ctx = PageContext {
            toasts: vec![ToastRequest::success("Thank you for your review!").with_title("Review Submitted").present()],
            ..PageContext::default()
        };

        let html = home_page(&ctx, &review).into_string();

        assert!(html.contains("Please provide a rating"));
        assert!(html.contains("&lt;b&gt;short&lt;/b&gt;"));
        assert!(html.contains("toast toast-success"));
        assert!(html.contains("Review Submitted"));
    }
}
