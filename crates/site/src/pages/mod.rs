//! Full pages.

mod contact;
mod home;
mod login;
mod not_found;

pub use contact::contact_page;
pub use home::home_page;
pub use login::login_page;
pub use not_found::not_found_page;
