//! In-memory toast queue.

use parking_lot::Mutex;
use trekway_application::ports::Notifier;
use trekway_domain::{ToastPresentation, ToastRequest};

/// Collects toasts raised while handling one page request.
///
/// The page renders whatever is queued when it is built.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: Mutex<Vec<ToastRequest>>,
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Removes and presents every queued toast, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<ToastPresentation> {
        std::mem::take(&mut *self.pending.lock())
            .iter()
            .map(ToastRequest::present)
            .collect()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: ToastRequest) {
        tracing::debug!(
            target: "trekway::toast",
            kind = ?toast.kind,
            message = %toast.message,
            "toast queued"
        );
        self.pending.lock().push(toast);
    }
}
