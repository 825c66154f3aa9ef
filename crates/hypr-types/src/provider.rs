//! Provider state sequence

use serde::{Deserialize, Serialize};

/// One milestone reported by the provider for a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStateEntry {
    /// State name, e.g. `REQUEST_SENT`
    pub name: String,
    /// Provider timestamp, empty when not reported
    #[serde(default)]
    pub timestamp: String,
}

impl ProviderStateEntry {
    /// Create an entry
    pub fn new(name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Ordered state transitions for one authentication request
///
/// The last entry reflects the current status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderState(pub Vec<ProviderStateEntry>);

impl ProviderState {
    /// Build a state sequence from `(name, timestamp)` pairs
    pub fn from_pairs<N, T>(pairs: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, ts)| ProviderStateEntry::new(name, ts))
                .collect(),
        )
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&ProviderStateEntry> {
        self.0.last()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_last_entry() {
        let state = ProviderState::from_pairs([("REQUEST_SENT", ""), ("COMPLETED", "1700000000")]);
        let latest = state.latest().unwrap();
        assert_eq!(latest.name, "COMPLETED");
        assert_eq!(latest.timestamp, "1700000000");
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_empty_state_has_no_latest() {
        let state = ProviderState::default();
        assert!(state.is_empty());
        assert!(state.latest().is_none());
    }
}
