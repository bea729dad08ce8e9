use maud::{Markup, html};
use trekway_domain::Carousel;

/// Carousel track with its controls.
///
/// The state is rendered into data attributes; the active slide is marked
/// and the arrows are disabled when the carousel cannot move that way.
pub fn carousel(id: &str, state: &Carousel, slides: Vec<Markup>) -> Markup {
    let autoplay = state.autoplay();
    html! {
        div
            class="carousel"
            id=(id)
            data-active=(state.active_index())
            data-loop=(state.is_looping().to_string())
            data-autoplay-delay=[autoplay.map(|a| a.delay_ms)]
            data-stop-on-interaction=[autoplay.map(|a| a.stop_on_interaction.to_string())]
            data-stop-on-hover=[autoplay.map(|a| a.stop_on_mouse_enter.to_string())]
        {
            div class="carousel-track" {
                @for (index, slide) in slides.into_iter().enumerate() {
                    div
                        class=(if index == state.active_index() { "carousel-slide active" } else { "carousel-slide" })
                        aria-hidden=(if index == state.active_index() { "false" } else { "true" })
                    { (slide) }
                }
            }
            button type="button" class="carousel-prev" aria-label="Previous slide" disabled[!state.can_prev()] { "‹" }
            button type="button" class="carousel-next" aria-label="Next slide" disabled[!state.can_next()] { "›" }
            div class="carousel-dots" {
                @for index in 0..state.len() {
                    button
                        type="button"
                        class=(if index == state.active_index() { "dot active" } else { "dot" })
                        aria-label=(format!("Go to slide {}", index + 1))
                        data-index=(index) {}
                }
            }
        }
    }
}
