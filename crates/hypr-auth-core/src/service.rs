//! Status resolver - ties together the session store and the HYPR provider

use std::sync::Arc;

use hypr_types::{AuthStatus, ProviderState, SessionKey, StatusResponse};
use tracing::{debug, instrument, warn};

use crate::{
    keys, provider::AuthenticationProvider, store::SessionContextStore, StatusError,
    ValidatedContext,
};

/// Authentication status resolver
///
/// Stateless: every piece of mutable state lives in the session store. Once a
/// session reaches a terminating status the provider is never called again
/// for it, so repeated polls are free and stable.
pub struct StatusResolver<S: SessionContextStore, P: AuthenticationProvider> {
    store: Arc<S>,
    provider: Arc<P>,
}

impl<S: SessionContextStore, P: AuthenticationProvider> StatusResolver<S, P> {
    /// Create a new status resolver
    pub fn new(store: Arc<S>, provider: Arc<P>) -> Self {
        Self { store, provider }
    }

    /// Resolve the current authentication status of a session
    ///
    /// Errors abort the call; no step retries.
    #[instrument(skip_all, fields(session_key = %session_key))]
    pub async fn get_authentication_status(
        &self,
        session_key: &SessionKey,
    ) -> Result<StatusResponse, StatusError> {
        if session_key.is_blank() {
            debug!("Blank session key");
            return Err(StatusError::InvalidSessionKey);
        }

        let context = self.store.lookup(session_key).await?.ok_or_else(|| {
            debug!("No session context cached for key");
            StatusError::InvalidSessionKey
        })?;

        let validated = ValidatedContext::try_from_context(&context)?;

        if let Some(status) = validated.terminal_status() {
            debug!(status = %status, "Session already terminal, skipping provider call");
            return Ok(StatusResponse::new(session_key.clone(), status));
        }

        let state = self
            .provider
            .get_authentication_status(
                &validated.base_url,
                &validated.api_token,
                &validated.request_id,
            )
            .await?;

        let status = normalize_state(&state)?;

        self.store
            .set_property(session_key, keys::AUTH_STATUS, status.as_str())
            .await?;

        debug!(status = %status, "Resolved authentication status");
        Ok(StatusResponse::new(session_key.clone(), status))
    }
}

impl<S: SessionContextStore, P: AuthenticationProvider> Clone for StatusResolver<S, P> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<S: SessionContextStore, P: AuthenticationProvider> std::fmt::Debug for StatusResolver<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusResolver").finish_non_exhaustive()
    }
}

/// Map the provider's latest state onto an [`AuthStatus`]
///
/// Matching is exact and case-sensitive. Unknown names are rejected rather
/// than defaulted.
pub fn normalize_state(state: &ProviderState) -> Result<AuthStatus, StatusError> {
    let latest = state.latest().ok_or_else(|| {
        warn!("Provider returned an empty state sequence");
        StatusError::MalformedProviderResponse("empty state sequence".to_string())
    })?;

    latest.name.parse().map_err(|_| {
        warn!(state = %latest.name, "Provider returned an unrecognized state");
        StatusError::UnrecognizedProviderState(latest.name.clone())
    })
}
