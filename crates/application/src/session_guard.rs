//! The single owner of session side effects.

use std::sync::Arc;

use crate::ports::{Navigator, SessionStore};

/// Reads the bearer token and reacts to an invalid session.
///
/// Every request shares one guard, so a 401 from any endpoint is handled
/// in exactly one place.
#[derive(Clone)]
pub struct SessionGuard {
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl SessionGuard {
    /// Creates a guard that redirects to `login_path`.
    #[must_use]
    pub fn new(
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            login_path: login_path.into(),
        }
    }

    /// Returns the stored bearer token.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.session
            .bearer_token()
            .filter(|token| !token.trim().is_empty())
    }

    /// Handles a 401: clears the session and sends the user to login.
    pub fn on_unauthenticated(&self) {
        tracing::warn!(
            target: "trekway::http",
            login = %self.login_path,
            "session rejected by backend, clearing session"
        );
        self.session.clear_session();
        self.navigator.navigate(&self.login_path);
    }

    /// Sends the user to login without touching the session.
    pub fn require_login(&self) {
        self.navigator.navigate(&self.login_path);
    }

    /// Login route this guard redirects to.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}
