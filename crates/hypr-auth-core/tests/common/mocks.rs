//! Mock session store and provider for testing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashmap::DashMap;
use hypr_auth_core::{
    keys, AuthenticationProvider, SessionContext, SessionContextStore, StatusError,
};
use hypr_types::{ProviderState, SessionKey};

pub const TEST_SESSION_KEY: &str = "testSessionKey";
pub const TEST_REQUEST_ID: &str = "testRequestId";
pub const TEST_BASE_URL: &str = "https://demo.hypr.com";
pub const TEST_API_TOKEN: &str = "testApiToken";

/// Fully configured context with the given status
#[allow(dead_code)]
pub fn pending_context(status: &str) -> SessionContext {
    SessionContext::new()
        .with_authenticator_property(keys::BASE_URL, TEST_BASE_URL)
        .with_authenticator_property(keys::API_TOKEN, TEST_API_TOKEN)
        .with_property(keys::AUTH_REQUEST_ID, TEST_REQUEST_ID)
        .with_property(keys::AUTH_STATUS, status)
}

/// In-memory session store for testing
#[derive(Default, Clone)]
pub struct MockSessionStore {
    contexts: Arc<DashMap<SessionKey, SessionContext>>,
    writes: Arc<AtomicUsize>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a context directly
    pub fn insert(&self, key: &str, context: SessionContext) {
        self.contexts.insert(SessionKey::from(key), context);
    }

    /// Current value of a dynamic property
    #[allow(dead_code)]
    pub fn property(&self, key: &str, name: &str) -> Option<String> {
        self.contexts
            .get(&SessionKey::from(key))
            .and_then(|c| c.property(name).map(String::from))
    }

    /// Number of property writes seen
    #[allow(dead_code)]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionContextStore for MockSessionStore {
    async fn lookup(&self, key: &SessionKey) -> Result<Option<SessionContext>, StatusError> {
        Ok(self.contexts.get(key).map(|r| r.value().clone()))
    }

    async fn set_property(
        &self,
        key: &SessionKey,
        name: &str,
        value: &str,
    ) -> Result<(), StatusError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match self.contexts.get_mut(key) {
            Some(mut context) => {
                context.set_property(name, value);
                Ok(())
            }
            None => Err(StatusError::InvalidSessionKey),
        }
    }
}

/// Store whose backend is unavailable
#[allow(dead_code)]
#[derive(Default, Clone)]
pub struct FailingSessionStore {
    /// Serve this context on lookup but fail writes
    context: Option<SessionContext>,
}

impl FailingSessionStore {
    /// Store failing every lookup
    #[allow(dead_code)]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Store serving `context` but failing write-back
    #[allow(dead_code)]
    pub fn read_only(context: SessionContext) -> Self {
        Self {
            context: Some(context),
        }
    }
}

#[async_trait]
impl SessionContextStore for FailingSessionStore {
    async fn lookup(&self, _: &SessionKey) -> Result<Option<SessionContext>, StatusError> {
        match &self.context {
            Some(context) => Ok(Some(context.clone())),
            None => Err(StatusError::Store("lookup failed: backend unavailable".to_string())),
        }
    }

    async fn set_property(&self, _: &SessionKey, _: &str, _: &str) -> Result<(), StatusError> {
        Err(StatusError::Store("write failed: backend unavailable".to_string()))
    }
}

/// Provider double that replays a canned result and counts calls
#[derive(Clone)]
pub struct MockProvider {
    result: Arc<Mutex<Result<ProviderState, StatusError>>>,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<(String, String, String)>>>,
}

impl MockProvider {
    /// Provider reporting the given `(name, timestamp)` states
    pub fn with_states(states: &[(&str, &str)]) -> Self {
        Self::with_result(Ok(ProviderState::from_pairs(states.iter().copied())))
    }

    /// Provider failing with the given error
    #[allow(dead_code)]
    pub fn failing(error: StatusError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<ProviderState, StatusError>) -> Self {
        Self {
            result: Arc::new(Mutex::new(result)),
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the states returned by later calls
    #[allow(dead_code)]
    pub fn set_states(&self, states: &[(&str, &str)]) {
        *self.result.lock().unwrap() = Ok(ProviderState::from_pairs(states.iter().copied()));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(base_url, api_token, request_id)` of the last call
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<(String, String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthenticationProvider for MockProvider {
    async fn get_authentication_status(
        &self,
        base_url: &str,
        api_token: &str,
        request_id: &str,
    ) -> Result<ProviderState, StatusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((
            base_url.to_string(),
            api_token.to_string(),
            request_id.to_string(),
        ));
        self.result.lock().unwrap().clone()
    }
}
