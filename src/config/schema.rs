//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the page gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, request limits).
    pub listener: ListenerConfig,

    /// Content service (hosted CMS) connection settings.
    pub content: ContentServiceConfig,

    /// Page regeneration policy.
    pub regeneration: RegenerationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Request timeout in seconds (covers fallback resolution).
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Content service connection settings.
///
/// The gateway consumes two read operations of the CMS query API: a
/// targeted single-document lookup and an untargeted listing. Both are
/// served from `{api_base}/{model}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentServiceConfig {
    /// Base URL of the content query API.
    pub api_base: String,

    /// API key identifying the content space. May be overridden by the
    /// `CMS_GATEWAY_API_KEY` environment variable.
    pub api_key: String,

    /// Model name of page documents.
    pub model: String,

    /// Timeout for a single content query in seconds.
    pub query_timeout_secs: u64,

    /// Maximum number of documents fetched when enumerating known pages.
    pub list_limit: u32,
}

impl Default for ContentServiceConfig {
    fn default() -> Self {
        Self {
            api_base: "https://cdn.builder.io/api/v3/content".to_string(),
            api_key: String::new(),
            model: "page".to_string(),
            query_timeout_secs: 10,
            list_limit: 100,
        }
    }
}

/// Page regeneration policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegenerationConfig {
    /// Minimum age in seconds before a served page becomes eligible for
    /// background regeneration (stale-while-revalidate interval).
    pub revalidate_secs: u64,

    /// Serve paths missing from the known-paths index by resolving them
    /// on first request. When disabled, unknown paths are a plain 404.
    pub fallback: bool,

    /// Pre-resolve all known paths into the page cache at startup.
    pub warm_on_start: bool,
}

impl Default for RegenerationConfig {
    fn default() -> Self {
        Self {
            revalidate_secs: 5,
            fallback: true,
            warm_on_start: false,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter when RUST_LOG is not set.
    pub log_filter: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "cms_gateway=info,tower_http=info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_deserializes() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [content]
            api_key = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(config.content.api_key, "abc123");
        assert_eq!(config.content.model, "page");
        assert_eq!(config.regeneration.revalidate_secs, 5);
        assert!(config.regeneration.fallback);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert!(!config.observability.metrics_enabled);
    }
}
