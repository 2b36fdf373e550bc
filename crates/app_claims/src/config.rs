//! Claims service configuration

use serde::Deserialize;

use domain_claims::DEFAULT_REJECTION_MESSAGE;

/// Claims service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClaimsConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Reason recorded on claims rejected at intake
    pub rejection_message: String,
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            rejection_message: DEFAULT_REJECTION_MESSAGE.to_string(),
        }
    }
}

impl ClaimsConfig {
    /// Loads configuration from `CLAIMS_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("CLAIMS").try_parsing(true))
    }

    /// Loads configuration from an arbitrary source layered over the defaults
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("CLAIMS")
            .try_parsing(true)
            .source(Some(map))
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClaimsConfig::from_source(env(&[])).unwrap();

        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.rejection_message, DEFAULT_REJECTION_MESSAGE);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = ClaimsConfig::from_source(env(&[
            ("CLAIMS_LOG_LEVEL", "debug"),
            ("CLAIMS_LOG_JSON", "true"),
            ("CLAIMS_REJECTION_MESSAGE", "Outside cover"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.rejection_message, "Outside cover");
    }
}
