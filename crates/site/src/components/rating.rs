use maud::{Markup, html};

const MAX_STARS: u8 = 5;

/// Five stars, the first `rating` of them filled.
pub fn stars(rating: u8) -> Markup {
    let filled = rating.min(MAX_STARS);
    html! {
        span class="stars" aria-label=(format!("{filled} out of {MAX_STARS} stars")) {
            @for i in 0..MAX_STARS {
                @if i < filled {
                    span class="star star-filled" { "★" }
                } @else {
                    span class="star" { "☆" }
                }
            }
        }
    }
}
