//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Default number of transitions kept in a registry's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Tunables for a [`StateRegistry`](crate::StateRegistry).
///
/// Deserializable so hosts can embed it in their own configuration files;
/// missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use statehost::RegistryConfig;
///
/// let config = RegistryConfig::default().with_history_limit(8);
/// assert_eq!(config.history_limit, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum number of transitions retained in history. Zero disables
    /// history recording.
    pub history_limit: usize,
}

impl RegistryConfig {
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn history_limit_deserializes() {
        let config: RegistryConfig = serde_json::from_str(r#"{"history_limit": 3}"#).unwrap();
        assert_eq!(config.history_limit, 3);
    }
}
