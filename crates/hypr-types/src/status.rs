//! Authentication status types

use serde::{Deserialize, Serialize};

use crate::AuthStatusParseError;

/// Status of a HYPR authentication request
///
/// `Completed`, `Failed` and `Canceled` are terminating: once a session
/// reaches one of them the provider is never polled again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthStatus {
    /// Authentication request was created
    Initiated,
    /// Provider acknowledged the request
    InitiatedResponse,
    /// Push notification was sent to the device
    RequestSent,
    /// User approved on the device
    Completed,
    /// Authentication failed on the device
    Failed,
    /// User or provider canceled the request
    Canceled,
    /// Waiting for the first provider update
    Pending,
}

impl AuthStatus {
    /// Every status, in declaration order
    pub const ALL: [AuthStatus; 7] = [
        Self::Initiated,
        Self::InitiatedResponse,
        Self::RequestSent,
        Self::Completed,
        Self::Failed,
        Self::Canceled,
        Self::Pending,
    ];

    /// Whether polling stops at this status
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Canceled)
    }

    /// Wire name of this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Initiated => "INITIATED",
            Self::InitiatedResponse => "INITIATED_RESPONSE",
            Self::RequestSent => "REQUEST_SENT",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Canceled => "CANCELED",
            Self::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuthStatus {
    type Err = AuthStatusParseError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AuthStatusParseError(s.to_string()))
    }
}
