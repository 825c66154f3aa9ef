//! HYPR API client

use async_trait::async_trait;
use hypr_types::{ProviderState, ProviderStateEntry};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use crate::error::codes;
use crate::provider::AuthenticationProvider;
use crate::{ProviderClientConfig, StatusError};

/// Path segments of the out-of-band authentication request resource
const AUTH_REQUEST_PATH: [&str; 6] = ["rp", "api", "oob", "client", "authentication", "requests"];

/// HYPR authentication status client
#[derive(Clone)]
pub struct HyprClient {
    client: Client,
}

impl HyprClient {
    /// Create a new HYPR client
    pub fn new(config: &ProviderClientConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .tcp_nodelay(true)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self { client }
    }

    /// Build `{base_url}/rp/api/oob/client/authentication/requests/{request_id}`
    fn status_url(base_url: &str, request_id: &str) -> Result<Url, StatusError> {
        let invalid_base = || {
            StatusError::InvalidAuthenticatorConfiguration(format!("invalid baseUrl: {base_url}"))
        };

        let mut url = Url::parse(base_url).map_err(|_| invalid_base())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid_base())?;
            segments
                .pop_if_empty()
                .extend(AUTH_REQUEST_PATH)
                .push(request_id);
        }
        Ok(url)
    }

    /// Map a non-success response onto a provider error
    async fn error_from_response(response: reqwest::Response) -> StatusError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "HYPR API error");

        let parsed = serde_json::from_str::<HyprErrorBody>(&body).unwrap_or_default();
        let message = parsed
            .message
            .unwrap_or_else(|| format!("HYPR API returned {status}"));

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            StatusError::ProviderTokenInvalid {
                code: parsed
                    .error_code
                    .unwrap_or_else(|| codes::PROVIDER_UNAUTHORIZED.to_string()),
                message,
            }
        } else {
            StatusError::ProviderRequestFailure {
                code: parsed
                    .error_code
                    .unwrap_or_else(|| codes::PROVIDER_ERROR.to_string()),
                message,
            }
        }
    }
}

#[async_trait]
impl AuthenticationProvider for HyprClient {
    #[instrument(skip(self, api_token))]
    async fn get_authentication_status(
        &self,
        base_url: &str,
        api_token: &str,
        request_id: &str,
    ) -> Result<ProviderState, StatusError> {
        let url = Self::status_url(base_url, request_id)?;
        debug!(url = %url, "Polling HYPR authentication request");

        let response = self
            .client
            .get(url)
            .bearer_auth(api_token)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HYPR API request failed");
                StatusError::ProviderRequestFailure {
                    code: codes::PROVIDER_UNREACHABLE.to_string(),
                    message: e.to_string(),
                }
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: HyprStatusResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse HYPR response");
            StatusError::MalformedProviderResponse(e.to_string())
        })?;

        debug!(states = body.state.len(), "HYPR returned authentication states");
        Ok(body.into())
    }
}

impl std::fmt::Debug for HyprClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyprClient").finish_non_exhaustive()
    }
}

// =============================================================================
// Wire types
// =============================================================================

/// Body of a successful status request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HyprStatusResponse {
    #[allow(dead_code)]
    request_id: Option<String>,
    #[serde(default)]
    state: Vec<HyprState>,
}

#[derive(Debug, Deserialize)]
struct HyprState {
    value: String,
    #[serde(default)]
    timestamp: Option<serde_json::Value>,
}

/// Error body; HYPR reports codes as either strings or numbers
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HyprErrorBody {
    #[serde(default, deserialize_with = "string_or_number")]
    error_code: Option<String>,
    #[serde(default, alias = "errorMessage")]
    message: Option<String>,
}

impl From<HyprStatusResponse> for ProviderState {
    fn from(body: HyprStatusResponse) -> Self {
        ProviderState(
            body.state
                .into_iter()
                .map(|s| ProviderStateEntry::new(s.value, timestamp_text(s.timestamp)))
                .collect(),
        )
    }
}

fn timestamp_text(value: Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
