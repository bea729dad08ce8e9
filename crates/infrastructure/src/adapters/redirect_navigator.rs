//! Navigation recorded as an HTTP redirect.

use parking_lot::Mutex;
use trekway_application::ports::Navigator;

/// Remembers where the user should be sent.
///
/// The first navigation wins; the web layer turns it into a redirect.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    target: Mutex<Option<String>>,
}

impl RedirectNavigator {
    /// Creates a navigator with no pending redirect.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending redirect target.
    #[must_use]
    pub fn target(&self) -> Option<String> {
        self.target.lock().clone()
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&self, path: &str) {
        let mut target = self.target.lock();
        if target.is_none() {
            tracing::debug!(target: "trekway::navigation", path, "redirect requested");
            *target = Some(path.to_string());
        }
    }
}
