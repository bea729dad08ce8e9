//! Notification port

use trekway_domain::ToastRequest;

/// Surfaces toasts to the user.
///
/// Fire-and-forget: implementations never fail and never block.
pub trait Notifier: Send + Sync {
    /// Shows a toast.
    fn notify(&self, toast: ToastRequest);
}
