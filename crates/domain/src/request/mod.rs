//! Outbound request types.

mod config;
mod envelope;
mod header;
mod method;
mod query;

pub use config::HeaderConfig;
pub use envelope::RequestEnvelope;
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::QueryParams;

/// Default content type of every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type used when a request carries a file upload.
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";
