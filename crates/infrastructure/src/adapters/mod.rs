//! Port implementations.

mod cookie_session;
mod redirect_navigator;
mod reqwest_transport;
mod toast_queue;

pub use cookie_session::CookieSession;
pub use redirect_navigator::RedirectNavigator;
pub use reqwest_transport::ReqwestTransport;
pub use toast_queue::ToastQueue;
