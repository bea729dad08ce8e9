//! Session storage port

/// Client-side session state: the bearer token and its marker entries.
pub trait SessionStore: Send + Sync {
    /// Returns the stored bearer token, if any.
    fn bearer_token(&self) -> Option<String>;

    /// Removes the token and every session marker.
    fn clear_session(&self);
}
