//! Configuration types for status resolution

use std::time::Duration;

/// HTTP client configuration for reaching the HYPR API
#[derive(Debug, Clone)]
pub struct ProviderClientConfig {
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// How long idle pooled connections are kept
    pub pool_idle_timeout: Duration,
}

impl Default for ProviderClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl ProviderClientConfig {
    /// Create a config with default timeouts
    pub fn new() -> Self {
        Self::default()
    }

    /// Set connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set pool idle timeout
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }
}

/// In-memory session store configuration
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// How long a session context lives after insertion
    pub ttl: Duration,
    /// Maximum number of cached session contexts
    pub max_capacity: u64,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15 * 60), // 15 minutes
            max_capacity: 10_000,
        }
    }
}

impl SessionStoreConfig {
    /// Create a config with default TTL and capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Set session TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set maximum capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }
}
