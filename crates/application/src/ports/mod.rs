//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the service layer and the host.
//! Each port is a trait implemented by adapters in the infrastructure layer
//! or by the web surface.

mod http_transport;
mod navigator;
mod notifier;
mod session_store;

pub use http_transport::{HttpTransport, TransportError, TransportResponse};
pub use navigator::Navigator;
pub use notifier::Notifier;
pub use session_store::SessionStore;
