//! Page shells.

mod site;

pub use site::{PageContext, site_layout};
