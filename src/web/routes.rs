//! Router construction.

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::web::{admin, autocomplete, schedules, status};

/// Creates the web server router.
pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(status::health))
        .route("/schedules", get(schedules::schedules))
        .route("/autocomplete", get(autocomplete::autocomplete))
        .route("/admin/reload-catalog", post(admin::reload_catalog))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new().nest("/api", api_router).layer((
        TraceLayer::new_for_http(),
        cors,
        // Generation is CPU-bound and can blow up combinatorially; the
        // engine itself never prunes, so the deadline lives here.
        TimeoutLayer::new(Duration::from_secs(30)),
    ))
}
