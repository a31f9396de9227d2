//! Opaque page documents returned by the content service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A page document as returned by the CMS.
///
/// The gateway treats the document as opaque: it is embedded into the
/// rendered shell verbatim and only two attributes are ever read locally,
/// `data.url` (for path enumeration) and `data.title` (for the shell's
/// `<title>` tag).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageDocument(Value);

impl PageDocument {
    /// Wrap a raw JSON document.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The document's published URL path (e.g. "/fr/about").
    pub fn url(&self) -> Option<&str> {
        self.0.get("data")?.get("url")?.as_str()
    }

    /// The document's title, if the author set one.
    pub fn title(&self) -> Option<&str> {
        self.0.get("data")?.get("title")?.as_str()
    }

    /// The document's identifier within the content space.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id")?.as_str()
    }

    /// Full document JSON.
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}
