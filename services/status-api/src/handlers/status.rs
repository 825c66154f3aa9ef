//! Authentication status handler

use axum::extract::{Path, State};
use axum::Json;
use hypr_types::{SessionKey, StatusResponse};

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/hypr/v1/authentication/status/:session_key
///
/// Poll the HYPR authentication status of a session
pub async fn authentication_status(
    State(state): State<AppState>,
    Path(session_key): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    let response = state
        .resolver
        .get_authentication_status(&SessionKey::from(session_key))
        .await?;

    Ok(Json(response))
}
