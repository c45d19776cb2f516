use serde::{Deserialize, Serialize};

use crate::error::{LocationError, LocationResult};

/// Configuration for a [`HashState`](crate::HashState).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashStateConfig {
    /// Whether `add_params`/`set_params` write `key=value` tokens. When
    /// `false`, only values are written and keys are recovered by position.
    pub include_names: bool,
    /// Whether a write leaving an empty hash resets the address bar to its
    /// path and query, instead of leaving a bare `#`.
    pub reset_on_empty: bool,
    /// Whether a write that changes the hash dispatches the registered
    /// listeners.
    pub dispatch_on_change: bool,
}

impl Default for HashStateConfig {
    fn default() -> Self {
        Self {
            include_names: false,
            reset_on_empty: true,
            dispatch_on_change: true,
        }
    }
}

impl HashStateConfig {
    /// Parse a configuration from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> LocationResult<Self> {
        toml::from_str(s).map_err(|e| LocationError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = HashStateConfig::default();
        assert!(!c.include_names);
        assert!(c.reset_on_empty);
        assert!(c.dispatch_on_change);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let c = HashStateConfig::from_toml_str("include_names = true\n").unwrap();
        assert!(c.include_names);
        assert!(c.reset_on_empty);
        assert!(c.dispatch_on_change);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(HashStateConfig::from_toml_str("").unwrap(), HashStateConfig::default());
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = HashStateConfig::from_toml_str("reset_on_empty = \"yes\"").unwrap_err();
        assert!(matches!(err, LocationError::Config(_)));
    }
}
