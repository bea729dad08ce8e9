//! Trekway - web server
//!
//! Wires the service layer to axum. Each request gets its own session,
//! navigator and toast queue; the transport and client configuration are
//! built once and shared.

mod context;
mod error;
mod routes;
mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use trekway_infrastructure::Settings;

pub use error::AppError;
pub use state::{AppState, BUNDLED_STATIC_DIR};

/// Builds the site router.
#[must_use]
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_dir());
    Router::new()
        .route("/", get(routes::home))
        .route("/contact", get(routes::contact).post(routes::submit_contact))
        .route("/login", get(routes::login))
        .route("/subscribe", post(routes::subscribe))
        .route("/review", post(routes::submit_review))
        .nest_service("/static", assets)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process stops.
///
/// # Errors
///
/// Returns an error if the state cannot be built or the address cannot be
/// bound.
pub async fn serve(settings: &Settings) -> Result<(), AppError> {
    let state = AppState::from_settings(settings)?;
    let addr = settings.socket_addr()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, backend = %state.config().base_url(), "Trekway listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
