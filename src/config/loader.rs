//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `content.api_key`.
pub const API_KEY_ENV: &str = "CMS_GATEWAY_API_KEY";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// The `CMS_GATEWAY_API_KEY` environment variable, when set and non-empty,
/// takes precedence over the file's `content.api_key` so that the secret
/// can stay out of version-controlled config.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    finalize(config)
}

/// Apply environment overrides and validate an already-deserialized config.
pub fn finalize(mut config: GatewayConfig) -> Result<GatewayConfig, ConfigError> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.content.api_key = key;
        }
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_rejects_invalid() {
        // No api key anywhere (the override env var is not set in CI)
        let config = GatewayConfig::default();
        if std::env::var(API_KEY_ENV).is_ok() {
            return;
        }
        let err = finalize(config).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_finalize_accepts_valid() {
        let mut config = GatewayConfig::default();
        config.content.api_key = "key".to_string();
        assert!(finalize(config).is_ok());
    }
}
