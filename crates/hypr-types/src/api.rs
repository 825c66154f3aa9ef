//! API request/response types

use serde::{Deserialize, Serialize};

use crate::{AuthStatus, SessionKey};

/// Result of an authentication status poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Session key the status belongs to
    pub session_key: SessionKey,
    /// Normalized authentication status
    pub status: AuthStatus,
}

impl StatusResponse {
    /// Create a status response
    pub fn new(session_key: SessionKey, status: AuthStatus) -> Self {
        Self {
            session_key,
            status,
        }
    }
}

/// Error envelope returned to API callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// API error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., `HYPR-60001`)
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error envelope
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
