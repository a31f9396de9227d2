//! Path-to-document resolution against the content service.
//!
//! # Responsibilities
//! - Resolve a route (locale + content path) to its page document
//! - Enumerate all known page paths for pre-generation
//!
//! # Design Decisions
//! - Locale travels as an explicit argument end to end; no ambient
//!   user-attribute state anywhere
//! - Absence of a document is a normal outcome, never an error
//! - Enumeration failure propagates: there is no fallback path list

use crate::content::client::{ContentError, HttpContentClient};
use crate::content::document::PageDocument;
use crate::content::query::{ListQuery, PageQuery};
use crate::routing::path::RoutePath;

/// Resolves routes to page documents.
#[derive(Debug, Clone)]
pub struct PageResolver {
    client: HttpContentClient,
    list_limit: u32,
}

impl PageResolver {
    /// Create a resolver over a content client.
    pub fn new(client: HttpContentClient, list_limit: u32) -> Self {
        Self { client, list_limit }
    }

    /// Resolve a route to its page document, if one is published.
    ///
    /// The content path targets the document's URL attribute; the locale
    /// is sent both as a targeting attribute and as a data option.
    /// Cache-busting is always on so regeneration sees fresh content.
    pub async fn resolve_page(
        &self,
        route: &RoutePath,
    ) -> Result<Option<PageDocument>, ContentError> {
        let query = PageQuery {
            url_path: &route.content_path,
            locale: route.locale.as_deref(),
            cachebust: true,
        };

        let document = self.client.get_page(&query).await?;

        tracing::debug!(
            content_path = %route.content_path,
            locale = route.locale.as_deref().unwrap_or("-"),
            found = document.is_some(),
            "Resolved page"
        );

        Ok(document)
    }

    /// Enumerate the request paths of all published pages.
    ///
    /// Documents without a `data.url` attribute cannot be addressed and
    /// are skipped with a warning.
    pub async fn known_paths(&self) -> Result<Vec<String>, ContentError> {
        let documents = self
            .client
            .list_pages(&ListQuery {
                limit: self.list_limit,
                ..ListQuery::default()
            })
            .await?;

        let mut paths = Vec::with_capacity(documents.len());
        for document in &documents {
            match document.url() {
                Some(url) => paths.push(url.to_string()),
                None => {
                    tracing::warn!(
                        id = document.id().unwrap_or("?"),
                        "Page document has no url attribute, skipping"
                    );
                }
            }
        }

        tracing::info!(count = paths.len(), "Enumerated known page paths");
        Ok(paths)
    }
}
