//! End-to-end tests of the site against a stand-in backend.
//!
//! The router is driven with `oneshot`; form submissions go through the real
//! reqwest transport to a local axum server that records what it received.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;
use trekway::AppState;
use trekway_application::{ClientConfig, SLOW_SERVER_MESSAGE};
use trekway_infrastructure::ReqwestTransport;

/// How the stand-in backend answers every call.
#[derive(Clone, Copy)]
enum Reply {
    Ok,
    FieldError,
    Unauthorized,
    Slow,
}

#[derive(Clone)]
struct Backend {
    reply: Reply,
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

async fn record(State(backend): State<Backend>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    let bytes = request.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    backend.received.lock().unwrap().push((path, body));

    match backend.reply {
        Reply::Ok => Json(json!({"message": "Thanks, we will be in touch!"})).into_response(),
        Reply::FieldError => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "Validation failed",
                "errors": [{"key": ["email"], "message": ["Invalid"]}]
            })),
        )
            .into_response(),
        Reply::Unauthorized => {
            (StatusCode::UNAUTHORIZED, Json(json!({"message": "Session expired"}))).into_response()
        }
        Reply::Slow => {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({})).into_response()
        }
    }
}

struct Harness {
    app: Router,
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

async fn harness(reply: Reply) -> Harness {
    let received = Arc::new(Mutex::new(Vec::new()));
    let backend = Backend {
        reply,
        received: received.clone(),
    };
    let backend_router = Router::new()
        .route("/api/contact", post(record))
        .route("/api/subscriber", post(record))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend_router).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}/api"))
        .unwrap()
        .with_timeout_ms(100)
        .unwrap();
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let state = AppState::new(ReqwestTransport::with_client(client), config);

    Harness {
        app: trekway::router(state),
        received,
    }
}

fn form_post(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const VALID_CONTACT: &[(&str, &str)] = &[
    ("name", "Mingma Sherpa"),
    ("email", "mingma@example.com"),
    ("phone", ""),
    ("message", "We are a group of four looking at Manaslu."),
];

#[tokio::test]
async fn test_home_page_renders() {
    let h = harness(Reply::Ok).await;
    let response = h
        .app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Everest Base Camp"));
    assert!(html.contains("Frequently asked questions"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let h = harness(Reply::Ok).await;
    let response = h
        .app
        .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_valid_contact_is_sent_once() {
    let h = harness(Reply::Ok).await;
    let response = h
        .app
        .oneshot(form_post("/contact", VALID_CONTACT, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Thanks, we will be in touch!"));
    assert!(!html.contains("Mingma Sherpa"), "form should be reset");

    let received = h.received.lock().unwrap().clone();
    assert_eq!(
        received,
        vec![(
            "/api/contact".to_string(),
            json!({
                "name": "Mingma Sherpa",
                "email": "mingma@example.com",
                "message": "We are a group of four looking at Manaslu."
            })
        )]
    );
}

#[tokio::test]
async fn test_invalid_contact_never_reaches_backend() {
    let h = harness(Reply::Ok).await;
    let response = h
        .app
        .oneshot(form_post(
            "/contact",
            &[("name", "Mingma"), ("email", "mingma@"), ("message", "hi")],
            None,
        ))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains("Message must be at least 10 characters"));
    assert!(!html.contains("toast-"));
    assert!(h.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_backend_field_errors_are_shown_inline() {
    let h = harness(Reply::FieldError).await;
    let response = h
        .app
        .oneshot(form_post("/contact", VALID_CONTACT, None))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains(r#"<p class="field-error" role="alert">Invalid</p>"#));
    assert!(html.contains(r#"<div class="alert alert-error" role="alert">Validation failed</div>"#));
    assert!(html.contains("toast toast-error"));
    assert!(html.contains("Mingma Sherpa"), "values are kept after a failure");
}

#[tokio::test]
async fn test_401_clears_session_and_redirects_to_login() {
    let h = harness(Reply::Unauthorized).await;
    let response = h
        .app
        .oneshot(form_post(
            "/contact",
            VALID_CONTACT,
            Some("_token=abc; _dwork=1; _role=admin"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    let cookies: Vec<&str> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert!(cookies.contains(&"_token=; Path=/; Max-Age=0; SameSite=Lax"));
    assert!(cookies.contains(&"_dwork=; Path=/; Max-Age=0; SameSite=Lax"));
    assert!(cookies.contains(&"_role=; Path=/; Max-Age=0; SameSite=Lax"));
}

#[tokio::test]
async fn test_timeout_shows_one_slow_server_toast() {
    let h = harness(Reply::Slow).await;
    let response = h
        .app
        .oneshot(form_post("/contact", VALID_CONTACT, None))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert_eq!(html.matches(SLOW_SERVER_MESSAGE).count(), 1);
    assert_eq!(html.matches("toast toast-").count(), 1);
}

#[tokio::test]
async fn test_subscribe_posts_email() {
    let h = harness(Reply::Ok).await;
    let response = h
        .app
        .oneshot(form_post("/subscribe", &[("email", "a@b.com")], Some("_token=abc")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let received = h.received.lock().unwrap().clone();
    assert_eq!(
        received,
        vec![("/api/subscriber".to_string(), json!({"email": "a@b.com"}))]
    );
}

#[tokio::test]
async fn test_subscribe_validation() {
    let h = harness(Reply::Ok).await;
    let response = h
        .app
        .oneshot(form_post("/subscribe", &[("email", "")], None))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Email is required"));
    assert!(h.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_review_is_acknowledged() {
    let h = harness(Reply::Ok).await;
    let response = h
        .app
        .oneshot(form_post(
            "/review",
            &[("rating", "5"), ("review", "Our guide made the trip unforgettable.")],
            None,
        ))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Thank you for your review!"));
    assert!(html.contains("Review Submitted"));
    assert!(h.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_page_assets_are_served() {
    let h = harness(Reply::Ok).await;

    let home = body_text(
        h.app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;
    assert!(home.contains(r#"href="/static/main.css""#));
    assert!(home.contains(r#"src="/static/carousel.js""#));

    let script = h
        .app
        .clone()
        .oneshot(Request::get("/static/carousel.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(script.status(), StatusCode::OK);
    let content_type = script.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.contains("javascript"), "{content_type}");
    let script = body_text(script).await;
    assert!(script.contains("autoplayDelay"));
    assert!(script.contains("data-duration") || script.contains("dataset.duration"));

    let stylesheet = h
        .app
        .oneshot(Request::get("/static/main.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(stylesheet.status(), StatusCode::OK);
}
