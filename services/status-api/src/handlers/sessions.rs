//! Session context seeding handlers
//!
//! The initiation flow that sends the HYPR push owns the session context.
//! These routes let it hand that context to this service.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hypr_auth_core::{keys, SessionContext};
use hypr_types::SessionKey;
use serde::Deserialize;

use crate::state::AppState;

/// Context for a freshly initiated authentication request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSessionRequest {
    pub base_url: String,
    pub api_token: String,
    pub request_id: String,
    /// Initial status, normally `PENDING`
    #[serde(default)]
    pub status: Option<String>,
}

impl From<PutSessionRequest> for SessionContext {
    fn from(req: PutSessionRequest) -> Self {
        let context = SessionContext::new()
            .with_authenticator_property(keys::BASE_URL, req.base_url)
            .with_authenticator_property(keys::API_TOKEN, req.api_token)
            .with_property(keys::AUTH_REQUEST_ID, req.request_id);

        match req.status {
            Some(status) => context.with_property(keys::AUTH_STATUS, status),
            None => context,
        }
    }
}

/// PUT /api/hypr/v1/sessions/:session_key
///
/// Store or replace the context of a session. Values are not validated
/// here; the status route reports incomplete contexts when polled.
pub async fn put_session(
    State(state): State<AppState>,
    Path(session_key): Path<String>,
    Json(req): Json<PutSessionRequest>,
) -> StatusCode {
    tracing::debug!(session_key = %session_key, "Seeding session context");
    state
        .sessions
        .insert(SessionKey::from(session_key), req.into())
        .await;
    StatusCode::NO_CONTENT
}

/// DELETE /api/hypr/v1/sessions/:session_key
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_key): Path<String>,
) -> StatusCode {
    state.sessions.remove(&SessionKey::from(session_key)).await;
    StatusCode::NO_CONTENT
}
