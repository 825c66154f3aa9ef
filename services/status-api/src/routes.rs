//! Router construction

use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the service router
pub fn router(state: AppState) -> Router {
    let timeout = state.request_timeout();

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/hypr/v1/authentication/status/:session_key",
            get(handlers::authentication_status),
        )
        .route(
            "/api/hypr/v1/sessions/:session_key",
            put(handlers::put_session).delete(handlers::delete_session),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
