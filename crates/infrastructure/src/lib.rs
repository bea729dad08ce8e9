//! Trekway Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus startup settings.

pub mod adapters;
pub mod http;
pub mod settings;

pub use adapters::{CookieSession, RedirectNavigator, ReqwestTransport, ToastQueue};
pub use http::{BodyBuildError, BuiltBody, build_body};
pub use settings::{Settings, SettingsError};
