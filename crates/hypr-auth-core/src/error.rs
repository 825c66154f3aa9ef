//! Status resolution errors

use thiserror::Error;

/// Stable error codes for errors raised locally
pub mod codes {
    pub const INVALID_SESSION_KEY: &str = "HYPR-60001";
    pub const INVALID_AUTHENTICATOR_CONFIGURATION: &str = "HYPR-65001";
    pub const INVALID_AUTHENTICATION_PROPERTIES: &str = "HYPR-65002";
    pub const UNRECOGNIZED_PROVIDER_STATE: &str = "HYPR-65003";
    pub const MALFORMED_PROVIDER_RESPONSE: &str = "HYPR-65004";
    pub const SESSION_STORE_ERROR: &str = "HYPR-65005";

    /// Used when the provider rejects the token without an error body
    pub const PROVIDER_UNAUTHORIZED: &str = "PROVIDER_UNAUTHORIZED";
    /// Used when the provider fails without an error body
    pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
    /// Used when the provider could not be reached at all
    pub const PROVIDER_UNREACHABLE: &str = "PROVIDER_UNREACHABLE";
}

/// Authentication status errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// No session context is cached for the key
    #[error("invalid session key")]
    InvalidSessionKey,

    /// Provider base URL or API token missing from the authenticator configuration
    #[error("invalid authenticator configuration: {0}")]
    InvalidAuthenticatorConfiguration(String),

    /// Request id missing from the session's authentication properties
    #[error("invalid authentication properties: {0}")]
    InvalidAuthenticationProperties(String),

    /// Provider rejected the API token
    #[error("provider rejected API token: {code} - {message}")]
    ProviderTokenInvalid {
        /// Provider error code
        code: String,
        /// Provider error message
        message: String,
    },

    /// Provider reported a request-level failure
    #[error("provider request failed: {code} - {message}")]
    ProviderRequestFailure {
        /// Provider error code
        code: String,
        /// Provider error message
        message: String,
    },

    /// Provider reported a state name outside the known status set
    #[error("unrecognized provider state: {0}")]
    UnrecognizedProviderState(String),

    /// Provider response could not be interpreted
    #[error("malformed provider response: {0}")]
    MalformedProviderResponse(String),

    /// Session store failure
    ///
    /// Returned by `SessionContextStore` implementations backed by fallible
    /// storage; the in-memory store never produces it.
    #[error("session store error: {0}")]
    Store(String),
}

impl StatusError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidSessionKey => 400,
            Self::MalformedProviderResponse(_) => 502,
            Self::InvalidAuthenticatorConfiguration(_)
            | Self::InvalidAuthenticationProperties(_)
            | Self::ProviderTokenInvalid { .. }
            | Self::ProviderRequestFailure { .. }
            | Self::UnrecognizedProviderState(_)
            | Self::Store(_) => 500,
        }
    }

    /// Get error code for API responses
    ///
    /// Provider failures carry the provider's own code unchanged.
    pub fn error_code(&self) -> &str {
        match self {
            Self::InvalidSessionKey => codes::INVALID_SESSION_KEY,
            Self::InvalidAuthenticatorConfiguration(_) => codes::INVALID_AUTHENTICATOR_CONFIGURATION,
            Self::InvalidAuthenticationProperties(_) => codes::INVALID_AUTHENTICATION_PROPERTIES,
            Self::ProviderTokenInvalid { code, .. } | Self::ProviderRequestFailure { code, .. } => {
                code
            }
            Self::UnrecognizedProviderState(_) => codes::UNRECOGNIZED_PROVIDER_STATE,
            Self::MalformedProviderResponse(_) => codes::MALFORMED_PROVIDER_RESPONSE,
            Self::Store(_) => codes::SESSION_STORE_ERROR,
        }
    }

    /// Get message for API responses
    ///
    /// Provider failures carry the provider's own message unchanged.
    pub fn message(&self) -> String {
        match self {
            Self::ProviderTokenInvalid { message, .. }
            | Self::ProviderRequestFailure { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the caller supplied bad input
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
