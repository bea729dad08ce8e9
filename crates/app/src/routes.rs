//! Page and form handlers.

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use trekway_application::{FormState, record_review};
use trekway_domain::{ContactFormValues, ReviewFormValues, SubscriberFormValues};
use trekway_site::{contact_page, home_page, login_page, not_found_page};

use crate::context::RequestContext;
use crate::state::AppState;

#[allow(clippy::unused_async)]
pub async fn home(headers: HeaderMap) -> Response {
    let ctx = RequestContext::from_headers(&headers);
    ctx.respond(StatusCode::OK, |page| home_page(&page, &FormState::default()))
}

#[allow(clippy::unused_async)]
pub async fn contact(headers: HeaderMap) -> Response {
    let ctx = RequestContext::from_headers(&headers);
    ctx.respond(StatusCode::OK, |page| contact_page(&page, &FormState::default()))
}

#[allow(clippy::unused_async)]
pub async fn login(headers: HeaderMap) -> Response {
    let ctx = RequestContext::from_headers(&headers);
    ctx.respond(StatusCode::OK, |page| login_page(&page))
}

#[allow(clippy::unused_async)]
pub async fn not_found(headers: HeaderMap) -> Response {
    let ctx = RequestContext::from_headers(&headers);
    ctx.respond(StatusCode::NOT_FOUND, |page| not_found_page(&page))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(values): Form<ContactFormValues>,
) -> Response {
    let ctx = RequestContext::from_headers(&headers);
    let service = ctx.contact_service(&state);
    let form = ctx.form::<ContactFormValues>();

    let outcome = form
        .submit(values, |v| async move {
            service.send_contact_message(&v.to_message()).await
        })
        .await;
    tracing::debug!(submitted = outcome.is_submitted(), "contact form handled");

    let form_state = form.state();
    ctx.respond(StatusCode::OK, |page| contact_page(&page, &form_state))
}

pub async fn subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(values): Form<SubscriberFormValues>,
) -> Response {
    let ctx = RequestContext::from_headers(&headers);
    let service = ctx.contact_service(&state);
    let form = ctx.form::<SubscriberFormValues>();

    let outcome = form
        .submit(values, |v| async move { service.subscribe_user(&v.email).await })
        .await;
    tracing::debug!(submitted = outcome.is_submitted(), "newsletter form handled");

    let newsletter = form.state();
    ctx.respond(StatusCode::OK, |mut page| {
        page.newsletter = newsletter;
        home_page(&page, &FormState::default())
    })
}

pub async fn submit_review(headers: HeaderMap, Form(values): Form<ReviewFormValues>) -> Response {
    let ctx = RequestContext::from_headers(&headers);
    let form = ctx.form::<ReviewFormValues>();

    let outcome = form
        .submit(values, |v| async move { record_review(&v).await })
        .await;
    tracing::debug!(submitted = outcome.is_submitted(), "review form handled");

    let review = form.state();
    ctx.respond(StatusCode::OK, |page| home_page(&page, &review))
}
