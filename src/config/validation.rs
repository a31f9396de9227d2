//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs actually parse
//! - Validate value ranges (timeouts > 0, non-empty identifiers)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("content.api_key is empty (set it in the config file or via CMS_GATEWAY_API_KEY)")]
    MissingApiKey,

    #[error("content.api_base '{value}' is not a valid http(s) URL: {reason}")]
    InvalidApiBase { value: String, reason: String },

    #[error("content.model is empty")]
    MissingModel,

    #[error("content.query_timeout_secs must be greater than zero")]
    ZeroQueryTimeout,

    #[error("content.list_limit must be greater than zero")]
    ZeroListLimit,

    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("listener.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("regeneration.revalidate_secs must be greater than zero")]
    ZeroRevalidateInterval,

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.content.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    match Url::parse(&config.content.api_base) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidApiBase {
            value: config.content.api_base.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidApiBase {
            value: config.content.api_base.clone(),
            reason: e.to_string(),
        }),
    }

    if config.content.model.trim().is_empty() {
        errors.push(ValidationError::MissingModel);
    }

    if config.content.query_timeout_secs == 0 {
        errors.push(ValidationError::ZeroQueryTimeout);
    }

    if config.content.list_limit == 0 {
        errors.push(ValidationError::ZeroListLimit);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.regeneration.revalidate_secs == 0 {
        errors.push(ValidationError::ZeroRevalidateInterval);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
