//! Trekway Domain - Core types
//!
//! This crate defines the domain model for the Trekway travel site:
//! request envelopes, the normalized error shape, toast requests, form
//! schemas and the static site content. All types here are pure Rust with
//! no I/O dependencies.

pub mod carousel;
pub mod content;
pub mod error;
pub mod failure;
pub mod forms;
pub mod request;
pub mod session;
pub mod toast;

pub use carousel::{Autoplay, Carousel};
pub use error::{DomainError, DomainResult};
pub use failure::{BackendErrorBody, FailureKind, FieldError, NormalizedError};
pub use forms::{
    ContactFormValues, ContactMessage, FieldErrors, FormSchema, ReviewFormValues,
    SubscriberFormValues,
};
pub use request::{Header, HeaderConfig, Headers, HttpMethod, QueryParams, RequestEnvelope};
pub use session::{SessionCookie, SessionKeys};
pub use toast::{ToastIcon, ToastKind, ToastPosition, ToastPresentation, ToastRequest, ToastVariant};
