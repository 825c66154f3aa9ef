//! Application state

use std::sync::Arc;

use hypr_auth_core::{HyprClient, InMemorySessionStore, StatusResolver};

use crate::config::Config;

/// Type alias for the resolver with concrete collaborators
pub type StatusResolverImpl = StatusResolver<InMemorySessionStore, HyprClient>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Status resolver
    pub resolver: Arc<StatusResolverImpl>,
    /// Session contexts, seeded through the sessions routes
    pub sessions: Arc<InMemorySessionStore>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let sessions = Arc::new(InMemorySessionStore::new(&config.sessions));
        let provider = Arc::new(HyprClient::new(&config.provider));

        Self {
            resolver: Arc::new(StatusResolver::new(Arc::clone(&sessions), provider)),
            sessions,
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> std::time::Duration {
        self.config.request_timeout
    }
}
