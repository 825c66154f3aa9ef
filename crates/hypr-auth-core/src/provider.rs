//! Authentication provider abstraction

use async_trait::async_trait;
use hypr_types::ProviderState;

use crate::StatusError;

/// Remote authentication provider
///
/// Abstracts the HYPR API so the resolver can be exercised without network access.
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Fetch the state sequence of an authentication request
    ///
    /// Invalid or expired tokens map to [`StatusError::ProviderTokenInvalid`],
    /// other provider failures to [`StatusError::ProviderRequestFailure`].
    async fn get_authentication_status(
        &self,
        base_url: &str,
        api_token: &str,
        request_id: &str,
    ) -> Result<ProviderState, StatusError>;
}
