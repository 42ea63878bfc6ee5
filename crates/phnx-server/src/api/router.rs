//! Axum router configuration.

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{generate, health};

/// Whole-request cap on a remote spec fetch. A stalled URL fails the
/// generate request instead of holding it open.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Client for fetching remote specs. Follows redirects; the 5 MB cap
    /// is enforced while reading the body.
    pub http: reqwest::Client,
}

/// Build the HTTP client used for remote spec fetches.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()
}

/// Create the API router with all routes.
pub fn create_router(http: reqwest::Client) -> Router {
    let state = AppState { http };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/generate", post(generate::generate))
        // Request envelope plus a 5 MB inline spec; the spec-size check
        // itself lives in the handler so it can answer in our error shape.
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
