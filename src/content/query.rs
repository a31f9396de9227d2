//! Query parameter types for the two content read operations.

/// Targeted lookup of a single page document.
#[derive(Debug, Clone)]
pub struct PageQuery<'a> {
    /// Content path targeting attribute. Always starts with `/`.
    pub url_path: &'a str,

    /// Locale targeting attribute; also sent as a data option so the
    /// service returns locale-resolved content. `None` means no locale.
    pub locale: Option<&'a str>,

    /// Bypass the service-side response cache. Regeneration always sets
    /// this: the latency cost buys freshness of regenerated pages.
    pub cachebust: bool,
}

/// Untargeted listing of all page documents.
#[derive(Debug, Clone)]
pub struct ListQuery<'a> {
    /// Disable targeting so every document is returned once.
    pub no_targeting: bool,

    /// Field path to omit from the payload (e.g. "data.blocks", the heavy
    /// visual block tree that path enumeration never needs).
    pub omit: Option<&'a str>,

    /// Maximum number of documents to fetch.
    pub limit: u32,
}

impl Default for ListQuery<'_> {
    fn default() -> Self {
        Self {
            no_targeting: true,
            omit: Some("data.blocks"),
            limit: 100,
        }
    }
}
