//! Trekway Application - Service layer and ports
//!
//! This crate defines the client side of the backend API:
//! - Port traits (transport, session storage, navigation, notifications)
//! - The request pipeline with its request/response interceptors
//! - Generic verb wrappers and the typed domain services
//! - Form submission flows

pub mod config;
pub mod error;
pub mod forms;
pub mod http_service;
pub mod pipeline;
pub mod ports;
pub mod services;
pub mod session_guard;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use error::{ApplicationError, ApplicationResult};
pub use forms::{FormController, FormMessages, FormState, SubmitOutcome, SubmittableForm};
pub use http_service::HttpService;
pub use pipeline::{ApiClient, SLOW_SERVER_MESSAGE};
pub use ports::{HttpTransport, Navigator, Notifier, SessionStore, TransportError, TransportResponse};
pub use services::{ApiMessage, ContactService, record_review};
pub use session_guard::SessionGuard;
