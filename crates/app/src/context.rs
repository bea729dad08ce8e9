//! Per-request adapters.
//!
//! The server plays the browser for one request: cookies in, a toast queue
//! and a pending redirect out.

use std::sync::Arc;

use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use maud::Markup;
use trekway_application::{ApiClient, ContactService, FormController, HttpService, SessionGuard, SubmittableForm};
use trekway_infrastructure::{CookieSession, RedirectNavigator, ReqwestTransport, ToastQueue};
use trekway_site::PageContext;

use crate::state::AppState;

/// Adapters scoped to one request.
pub struct RequestContext {
    session: Arc<CookieSession>,
    navigator: Arc<RedirectNavigator>,
    toasts: Arc<ToastQueue>,
}

impl RequestContext {
    /// Reads the session from the request cookies.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok());
        Self {
            session: Arc::new(CookieSession::from_cookie_header(cookie)),
            navigator: Arc::new(RedirectNavigator::new()),
            toasts: Arc::new(ToastQueue::new()),
        }
    }

    /// Contact service bound to this request's session and toasts.
    pub fn contact_service(&self, state: &AppState) -> ContactService<ReqwestTransport> {
        let config = state.config();
        let guard = SessionGuard::new(
            self.session.clone(),
            self.navigator.clone(),
            config.login_path(),
        );
        let client = ApiClient::new(state.transport(), config, guard, self.toasts.clone());
        ContactService::new(Arc::new(HttpService::new(client)))
    }

    /// Form controller reporting into this request's toasts.
    pub fn form<V: SubmittableForm>(&self) -> FormController<V> {
        FormController::new(self.toasts.clone())
    }

    /// Page chrome carrying the queued toasts.
    pub fn page(&self) -> PageContext {
        PageContext {
            toasts: self.toasts.drain(),
            ..PageContext::default()
        }
    }

    /// Turns a rendered page into the response.
    ///
    /// A pending navigation wins over the page and becomes a 303; cleared
    /// session cookies are expired either way.
    pub fn respond(&self, status: StatusCode, render: impl FnOnce(PageContext) -> Markup) -> Response {
        let mut response = match self.navigator.target() {
            Some(target) => redirect(&target),
            None => (status, Html(render(self.page()).into_string())).into_response(),
        };

        for cookie in self.session.removal_headers() {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::warn!(error = %e, "skipping invalid Set-Cookie value"),
            }
        }
        response
    }
}

fn redirect(target: &str) -> Response {
    match HeaderValue::from_str(target) {
        Ok(location) => (StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response(),
        Err(e) => {
            tracing::error!(error = %e, target, "invalid redirect target");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
