//! Carousel position and autoplay state.
//!
//! Models the slide index of the hero, trek and testimonial carousels plus
//! the autoplay policy that advances them on a timer.

use serde::{Deserialize, Serialize};

/// Autoplay policy of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autoplay {
    /// Time between automatic advances.
    pub delay_ms: u64,
    /// Stop for good once the user navigates manually.
    pub stop_on_interaction: bool,
    /// Pause while the pointer is over the carousel.
    pub stop_on_mouse_enter: bool,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            delay_ms: 3_000,
            stop_on_interaction: false,
            stop_on_mouse_enter: true,
        }
    }
}

impl Autoplay {
    /// Default policy with a custom delay.
    #[must_use]
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }
}

/// Index state of a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    active: usize,
    looping: bool,
    autoplay: Option<Autoplay>,
    hovered: bool,
    stopped: bool,
}

impl Carousel {
    /// Creates a carousel over `len` slides, starting at the first one.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            looping: false,
            autoplay: None,
            hovered: false,
            stopped: false,
        }
    }

    /// Wraps around at both ends.
    #[must_use]
    pub const fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Enables autoplay.
    #[must_use]
    pub const fn with_autoplay(mut self, autoplay: Autoplay) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Index of the selected slide.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if navigation wraps around at both ends.
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    /// Autoplay policy, if enabled.
    #[must_use]
    pub const fn autoplay(&self) -> Option<Autoplay> {
        self.autoplay
    }

    /// Returns true if `prev` would move.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.len > 1 && (self.looping || self.active > 0)
    }

    /// Returns true if `next` would move.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.len > 1 && (self.looping || self.active + 1 < self.len)
    }

    /// Selects the previous slide.
    pub fn prev(&mut self) {
        self.interact();
        self.step_back();
    }

    /// Selects the next slide.
    pub fn next(&mut self) {
        self.interact();
        self.step_forward();
    }

    /// Selects a slide by index; out of range indices are clamped.
    pub fn scroll_to(&mut self, index: usize) {
        self.interact();
        if self.len > 0 {
            self.active = index.min(self.len - 1);
        }
    }

    /// Pointer entered the carousel.
    pub const fn mouse_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the carousel.
    pub const fn mouse_leave(&mut self) {
        self.hovered = false;
    }

    /// Returns true if autoplay would advance on the next tick.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some_and(|policy| {
            !self.stopped && !(policy.stop_on_mouse_enter && self.hovered) && self.len > 1
        })
    }

    /// Autoplay timer fired. Returns true if the slide changed.
    ///
    /// At the last slide of a non-looping carousel autoplay jumps back to
    /// the first one.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        if self.can_next() {
            self.step_forward();
        } else {
            self.active = 0;
        }
        true
    }

    fn interact(&mut self) {
        if self.autoplay.is_some_and(|policy| policy.stop_on_interaction) {
            self.stopped = true;
        }
    }

    const fn step_forward(&mut self) {
        if !self.can_next() {
            return;
        }
        self.active = if self.active + 1 == self.len { 0 } else { self.active + 1 };
    }

    const fn step_back(&mut self) {
        if !self.can_prev() {
            return;
        }
        self.active = if self.active == 0 { self.len - 1 } else { self.active - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bounded_navigation() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.active_index(), 0);

        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.active_index(), 2);
        assert!(!carousel.can_next());
    }

    #[test]
    fn test_looping_navigation() {
        let mut carousel = Carousel::new(3).with_loop(true);
        carousel.prev();
        assert_eq!(carousel.active_index(), 2);
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_scroll_to_clamps() {
        let mut carousel = Carousel::new(4);
        carousel.scroll_to(2);
        assert_eq!(carousel.active_index(), 2);
        carousel.scroll_to(99);
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn test_autoplay_pauses_on_hover() {
        let mut carousel = Carousel::new(3).with_autoplay(Autoplay::default());
        assert!(carousel.tick());
        assert_eq!(carousel.active_index(), 1);

        carousel.mouse_enter();
        assert!(!carousel.tick());
        assert_eq!(carousel.active_index(), 1);

        carousel.mouse_leave();
        assert!(carousel.tick());
        assert!(carousel.tick());
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_interaction_keeps_autoplay_by_default() {
        let mut carousel = Carousel::new(3).with_autoplay(Autoplay::default());
        carousel.next();
        assert!(carousel.is_playing());

        let mut strict = Carousel::new(3).with_autoplay(Autoplay {
            stop_on_interaction: true,
            ..Autoplay::default()
        });
        strict.next();
        assert!(!strict.is_playing());
        assert!(!strict.tick());
    }

    #[test]
    fn test_without_autoplay_tick_is_noop() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.tick());
        assert_eq!(Autoplay::with_delay(5_000).delay_ms, 5_000);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.scroll_to(3);
        assert!(carousel.is_empty());
        assert_eq!(carousel.active_index(), 0);
    }
}
