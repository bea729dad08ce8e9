//! Navigation port

/// Moves the user to another route.
pub trait Navigator: Send + Sync {
    /// Navigates to `path`.
    fn navigate(&self, path: &str);
}
