//! Common error types

use thiserror::Error;

/// Error parsing an authentication status string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized authentication status: {0}")]
pub struct AuthStatusParseError(pub String);
