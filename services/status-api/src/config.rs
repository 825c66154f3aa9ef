//! Configuration for the status API service.

use std::time::Duration;

use hypr_auth_core::{ProviderClientConfig, SessionStoreConfig};

/// Status API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// HYPR HTTP client configuration
    pub provider: ProviderClientConfig,

    /// Session context store configuration
    pub sessions: SessionStoreConfig,

    /// Whole-request timeout applied by the HTTP layer
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &'static str, default: &str| -> String {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        let http_port = var("HTTP_PORT", "8080")
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // HYPR client timeouts
        let connect_timeout_secs: u64 = var("PROVIDER_CONNECT_TIMEOUT_SECS", "5")
            .parse()
            .map_err(|_| ConfigError::Invalid("PROVIDER_CONNECT_TIMEOUT_SECS"))?;

        let provider_timeout_secs: u64 = var("PROVIDER_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|_| ConfigError::Invalid("PROVIDER_TIMEOUT_SECS"))?;

        // Session store (default 15 minutes)
        let session_ttl_secs: u64 = var("SESSION_TTL_SECS", "900")
            .parse()
            .map_err(|_| ConfigError::Invalid("SESSION_TTL_SECS"))?;

        let session_max_capacity: u64 = var("SESSION_MAX_CAPACITY", "10000")
            .parse()
            .map_err(|_| ConfigError::Invalid("SESSION_MAX_CAPACITY"))?;

        // Request timeout (default 30 seconds)
        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        if provider_timeout_secs == 0 || request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be greater than zero"));
        }

        Ok(Self {
            http_port,
            provider: ProviderClientConfig::new()
                .with_connect_timeout(Duration::from_secs(connect_timeout_secs))
                .with_request_timeout(Duration::from_secs(provider_timeout_secs)),
            sessions: SessionStoreConfig::new()
                .with_ttl(Duration::from_secs(session_ttl_secs))
                .with_max_capacity(session_max_capacity),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.provider.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.provider.request_timeout, Duration::from_secs(10));
        assert_eq!(config.sessions.ttl, Duration::from_secs(900));
        assert_eq!(config.sessions.max_capacity, 10_000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[("HTTP_PORT", "9090"), ("SESSION_TTL_SECS", "60")]).unwrap();
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.sessions.ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("HTTP_PORT", "not-a-port")]),
            Err(ConfigError::Invalid("HTTP_PORT"))
        ));
        assert!(matches!(
            load(&[("PROVIDER_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid(_))
        ));
    }
}
