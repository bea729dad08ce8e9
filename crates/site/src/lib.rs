//! Trekway Site - Server-rendered pages
//!
//! Stateless maud components rendering the static content catalog, the
//! forms with their inline errors, and the queued toasts.

pub mod components;
pub mod layouts;
pub mod pages;

pub use layouts::{PageContext, site_layout};
pub use pages::{contact_page, home_page, login_page, not_found_page};
