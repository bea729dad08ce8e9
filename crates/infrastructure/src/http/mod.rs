//! HTTP infrastructure utilities.

mod body_builder;

pub use body_builder::{BodyBuildError, BuiltBody, build_body, is_multipart};
