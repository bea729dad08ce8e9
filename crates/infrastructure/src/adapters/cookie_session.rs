//! Cookie-backed session store.

use parking_lot::RwLock;
use trekway_application::ports::SessionStore;
use trekway_domain::{SessionCookie, SessionKeys};

/// Session state read from one request's cookies.
///
/// Clearing the session drops the cookies locally and remembers which names
/// the response must expire.
#[derive(Debug, Default)]
pub struct CookieSession {
    keys: SessionKeys,
    cookies: RwLock<Vec<SessionCookie>>,
    expired: RwLock<Vec<String>>,
}

impl CookieSession {
    /// Creates an empty session using the site's cookie names.
    #[must_use]
    pub fn new(keys: SessionKeys) -> Self {
        Self {
            keys,
            cookies: RwLock::new(Vec::new()),
            expired: RwLock::new(Vec::new()),
        }
    }

    /// Builds the session from a `Cookie` request header.
    #[must_use]
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        let session = Self::new(SessionKeys::DEFAULT);
        if let Some(header) = header {
            *session.cookies.write() = SessionCookie::parse_header(header);
        }
        session
    }

    /// Sets a cookie, replacing one with the same name.
    pub fn set(&self, name: &str, value: &str) {
        let mut cookies = self.cookies.write();
        cookies.retain(|c| c.name != name);
        cookies.push(SessionCookie::new(name, value));
    }

    /// Returns a cookie value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .read()
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.clone())
    }

    /// Returns true once the session has been cleared.
    #[must_use]
    pub fn was_cleared(&self) -> bool {
        !self.expired.read().is_empty()
    }

    /// `Set-Cookie` values expiring every cleared cookie.
    #[must_use]
    pub fn removal_headers(&self) -> Vec<String> {
        self.expired
            .read()
            .iter()
            .map(|name| SessionCookie::removal(name))
            .collect()
    }
}

impl SessionStore for CookieSession {
    fn bearer_token(&self) -> Option<String> {
        self.get(self.keys.token)
    }

    fn clear_session(&self) {
        let names: Vec<&str> = std::iter::once(self.keys.token)
            .chain(self.keys.markers.iter().copied())
            .collect();

        self.cookies
            .write()
            .retain(|c| !names.contains(&c.name.as_str()));

        let mut expired = self.expired.write();
        for name in names {
            if !expired.iter().any(|n| n == name) {
                expired.push(name.to_string());
            }
        }
        drop(expired);

        tracing::debug!(target: "trekway::session", "session cookies cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_token_from_cookie_header() {
        let session = CookieSession::from_cookie_header(Some("theme=dark; _token=abc; _role=guide"));
        assert_eq!(session.bearer_token(), Some("abc".to_string()));
        assert_eq!(session.get("_role"), Some("guide".to_string()));
        assert!(!session.was_cleared());
    }

    #[test]
    fn test_missing_header_has_no_token() {
        let session = CookieSession::from_cookie_header(None);
        assert_eq!(session.bearer_token(), None);
    }

    #[test]
    fn test_clear_removes_token_and_markers_only() {
        let session = CookieSession::from_cookie_header(Some("_token=abc; _dwork=1; _role=admin; theme=dark"));

        session.clear_session();
        session.clear_session();

        assert_eq!(session.bearer_token(), None);
        assert_eq!(session.get("_dwork"), None);
        assert_eq!(session.get("theme"), Some("dark".to_string()));
        assert_eq!(
            session.removal_headers(),
            vec![
                "_token=; Path=/; Max-Age=0; SameSite=Lax".to_string(),
                "_dwork=; Path=/; Max-Age=0; SameSite=Lax".to_string(),
                "_role=; Path=/; Max-Age=0; SameSite=Lax".to_string(),
            ]
        );
    }

    #[test]
    fn test_set_replaces_value() {
        let session = CookieSession::new(SessionKeys::DEFAULT);
        session.set("_token", "one");
        session.set("_token", "two");
        assert_eq!(session.bearer_token(), Some("two".to_string()));
    }
}
