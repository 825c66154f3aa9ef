//! Session context storage
//!
//! The identity framework owns session contexts; the resolver only looks them
//! up and writes the polled status back.

use std::sync::Arc;

use async_trait::async_trait;
use hypr_types::SessionKey;
use moka::future::Cache;
use tokio::sync::RwLock;

use crate::{SessionContext, SessionStoreConfig, StatusError};

/// Keyed access to cached session contexts
#[async_trait]
pub trait SessionContextStore: Send + Sync {
    /// Fetch a snapshot of the context cached for `key`
    async fn lookup(&self, key: &SessionKey) -> Result<Option<SessionContext>, StatusError>;

    /// Set a dynamic property on the context cached for `key`
    async fn set_property(
        &self,
        key: &SessionKey,
        name: &str,
        value: &str,
    ) -> Result<(), StatusError>;
}

/// In-memory session store with time-based expiry
///
/// Contexts are held behind a lock so property writes do not reset the
/// entry's time to live.
#[derive(Clone)]
pub struct InMemorySessionStore {
    contexts: Cache<SessionKey, Arc<RwLock<SessionContext>>>,
}

impl InMemorySessionStore {
    /// Create a store with the given TTL and capacity
    pub fn new(config: &SessionStoreConfig) -> Self {
        Self {
            contexts: Cache::builder()
                .time_to_live(config.ttl)
                .max_capacity(config.max_capacity)
                .build(),
        }
    }

    /// Cache a context, replacing any existing one for the key
    pub async fn insert(&self, key: SessionKey, context: SessionContext) {
        self.contexts
            .insert(key, Arc::new(RwLock::new(context)))
            .await;
    }

    /// Drop the context cached for `key`
    pub async fn remove(&self, key: &SessionKey) {
        self.contexts.invalidate(key).await;
    }

    /// Approximate number of cached contexts
    pub fn len(&self) -> u64 {
        self.contexts.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(&SessionStoreConfig::default())
    }
}

#[async_trait]
impl SessionContextStore for InMemorySessionStore {
    async fn lookup(&self, key: &SessionKey) -> Result<Option<SessionContext>, StatusError> {
        match self.contexts.get(key).await {
            Some(entry) => Ok(Some(entry.read().await.clone())),
            None => Ok(None),
        }
    }

    async fn set_property(
        &self,
        key: &SessionKey,
        name: &str,
        value: &str,
    ) -> Result<(), StatusError> {
        let entry = self.contexts.get(key).await.ok_or_else(|| {
            tracing::debug!(session_key = %key, "Session context expired before write-back");
            StatusError::InvalidSessionKey
        })?;
        entry.write().await.set_property(name, value);
        Ok(())
    }
}

impl std::fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionStore")
            .field("entries", &self.contexts.entry_count())
            .finish_non_exhaustive()
    }
}
