//! HTTP client for the content service query API.
//!
//! # Responsibilities
//! - Issue the two read operations the gateway depends on
//! - Map targeting attributes to query-string parameters
//! - Decode the `{"results": [...]}` response envelope
//! - Handle timeouts and non-success statuses with typed errors
//!
//! # Design Decisions
//! - No retries: resolution failures surface unchanged per request
//! - Not-found is Ok(None); only transport/API failures are errors

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::schema::ContentServiceConfig;
use crate::content::document::PageDocument;
use crate::content::query::{ListQuery, PageQuery};
use crate::observability::metrics;

/// Error type for content service queries.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content service returned status {status} for {operation}")]
    Api { status: u16, operation: &'static str },
}

/// Response envelope of the content query API.
#[derive(Debug, Deserialize)]
struct ContentEnvelope {
    #[serde(default)]
    results: Vec<PageDocument>,
}

/// Client for the hosted CMS query API.
///
/// Read-only: the gateway never writes to the content store.
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpContentClient {
    /// Create a client from the content service configuration.
    pub fn new(config: &ContentServiceConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.query_timeout_secs))
            .build()?;

        let endpoint = format!(
            "{}/{}",
            config.api_base.trim_end_matches('/'),
            config.model
        );

        tracing::debug!(endpoint = %endpoint, "Content client initialized");

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the page document matching the given targeting attributes.
    ///
    /// Returns `Ok(None)` when no document matches.
    pub async fn get_page(
        &self,
        query: &PageQuery<'_>,
    ) -> Result<Option<PageDocument>, ContentError> {
        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", self.api_key.clone()),
            ("userAttributes.urlPath", query.url_path.to_string()),
            ("limit", "1".to_string()),
        ];
        if let Some(locale) = query.locale {
            params.push(("userAttributes.locale", locale.to_string()));
            params.push(("locale", locale.to_string()));
        }
        if query.cachebust {
            params.push(("cachebust", "true".to_string()));
        }

        let response = self.http.get(&self.endpoint).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            metrics::record_content_error("get_page");
            return Err(ContentError::Api {
                status: status.as_u16(),
                operation: "get_page",
            });
        }

        let envelope: ContentEnvelope = response.json().await?;
        Ok(envelope.results.into_iter().next())
    }

    /// Fetch all page documents, targeting disabled.
    ///
    /// Used to enumerate known paths; heavy payload fields are omitted to
    /// keep the transfer small.
    pub async fn list_pages(
        &self,
        query: &ListQuery<'_>,
    ) -> Result<Vec<PageDocument>, ContentError> {
        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", self.api_key.clone()),
            ("limit", query.limit.to_string()),
        ];
        if query.no_targeting {
            params.push(("noTargeting", "true".to_string()));
        }
        if let Some(omit) = query.omit {
            params.push(("omit", omit.to_string()));
        }

        let response = self.http.get(&self.endpoint).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            metrics::record_content_error("list_pages");
            return Err(ContentError::Api {
                status: status.as_u16(),
                operation: "list_pages",
            });
        }

        let envelope: ContentEnvelope = response.json().await?;
        Ok(envelope.results)
    }
}
