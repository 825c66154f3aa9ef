//! Session context model
//!
//! A session context is the string-keyed property bag the identity framework
//! caches per session key. It is converted into a [`ValidatedContext`] right
//! after lookup so the rest of the resolution works with typed values.

use std::collections::HashMap;

use hypr_types::AuthStatus;

use crate::StatusError;

/// Property names understood by the resolver
pub mod keys {
    /// HYPR API base URL (authenticator property)
    pub const BASE_URL: &str = "baseUrl";
    /// HYPR API token (authenticator property)
    pub const API_TOKEN: &str = "apiToken";
    /// Last known authentication status (dynamic property)
    pub const AUTH_STATUS: &str = "hyprAuthStatus";
    /// HYPR request id assigned at initiation (dynamic property)
    pub const AUTH_REQUEST_ID: &str = "hyprAuthRequestId";
}

/// Cached context of one authentication flow
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Static authenticator configuration
    authenticator_properties: HashMap<String, String>,
    /// Per-flow properties set by the initiation flow and by polling
    properties: HashMap<String, String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style authenticator property setter
    pub fn with_authenticator_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set_authenticator_property(name, value);
        self
    }

    /// Builder-style dynamic property setter
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn authenticator_property(&self, name: &str) -> Option<&str> {
        self.authenticator_properties.get(name).map(String::as_str)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn set_authenticator_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.authenticator_properties.insert(name.into(), value.into());
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }
}

// Values are omitted: the authenticator properties hold the API token.
impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field(
                "authenticator_properties",
                &self.authenticator_properties.keys().collect::<Vec<_>>(),
            )
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Session context after configuration and property validation
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedContext {
    /// HYPR API base URL
    pub base_url: String,
    /// HYPR API token
    pub api_token: String,
    /// HYPR request id
    pub request_id: String,
    /// Last known status, `None` when absent or unrecognized
    pub status: Option<AuthStatus>,
}

impl ValidatedContext {
    /// Validate a raw session context
    ///
    /// Configuration is checked before the authentication properties, so a
    /// context missing both reports the configuration error.
    pub fn try_from_context(context: &SessionContext) -> Result<Self, StatusError> {
        let base_url = non_blank(context.authenticator_property(keys::BASE_URL));
        let api_token = non_blank(context.authenticator_property(keys::API_TOKEN));

        let (base_url, api_token) = match (base_url, api_token) {
            (Some(url), Some(token)) => (url, token),
            (url, token) => {
                let missing: Vec<&str> = [(keys::BASE_URL, url), (keys::API_TOKEN, token)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(name, _)| name)
                    .collect();
                tracing::debug!(missing = ?missing, "Authenticator configuration incomplete");
                return Err(StatusError::InvalidAuthenticatorConfiguration(format!(
                    "missing {}",
                    missing.join(", ")
                )));
            }
        };

        let request_id = non_blank(context.property(keys::AUTH_REQUEST_ID)).ok_or_else(|| {
            tracing::debug!("Authentication request id missing from session context");
            StatusError::InvalidAuthenticationProperties(format!(
                "missing {}",
                keys::AUTH_REQUEST_ID
            ))
        })?;

        let status = non_blank(context.property(keys::AUTH_STATUS)).and_then(|raw| {
            raw.parse::<AuthStatus>()
                .map_err(|e| tracing::warn!(error = %e, "Ignoring cached authentication status"))
                .ok()
        });

        Ok(Self {
            base_url: base_url.to_string(),
            api_token: api_token.to_string(),
            request_id: request_id.to_string(),
            status,
        })
    }

    /// The cached status, if it is terminating
    pub fn terminal_status(&self) -> Option<AuthStatus> {
        self.status.filter(AuthStatus::is_terminal)
    }
}

impl std::fmt::Debug for ValidatedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedContext")
            .field("base_url", &self.base_url)
            .field("request_id", &self.request_id)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
