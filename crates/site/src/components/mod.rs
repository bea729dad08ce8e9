//! Reusable page fragments.

mod carousel;
mod footer;
mod form;
mod navbar;
mod rating;
mod toast;

pub use carousel::carousel;
pub use footer::footer;
pub use form::{field_error, general_error, submit_button, text_area, text_input};
pub use navbar::navbar;
pub use rating::stars;
pub use toast::toast_stack;
