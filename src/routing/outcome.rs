//! Render outcome selection.
//!
//! # Responsibilities
//! - Decide between rendering content and serving a not-found page
//! - Preserve the editing/preview exception: the CMS editor probes draft
//!   content that does not exist server-side yet, and must see an empty
//!   canvas instead of a 404

use crate::content::document::PageDocument;

/// What the gateway should serve for a resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Render the page shell (with the document, or as an empty draft
    /// canvas during editing/preview).
    Render,

    /// Serve the not-found page, marked non-indexable.
    NotFound,
}

/// Decision table over document presence and editing/preview context.
///
/// | document | editing/preview | outcome  |
/// |----------|-----------------|----------|
/// | present  | —               | Render   |
/// | absent   | yes             | Render   |
/// | absent   | no              | NotFound |
pub fn select_render_outcome(
    document: Option<&PageDocument>,
    editing_or_preview: bool,
) -> RenderOutcome {
    if document.is_some() || editing_or_preview {
        RenderOutcome::Render
    } else {
        RenderOutcome::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> PageDocument {
        PageDocument::new(json!({ "data": { "url": "/about" } }))
    }

    #[test]
    fn test_document_present_renders() {
        assert_eq!(
            select_render_outcome(Some(&doc()), false),
            RenderOutcome::Render
        );
        assert_eq!(
            select_render_outcome(Some(&doc()), true),
            RenderOutcome::Render
        );
    }

    #[test]
    fn test_absent_document_is_not_found() {
        assert_eq!(select_render_outcome(None, false), RenderOutcome::NotFound);
    }

    #[test]
    fn test_preview_context_never_404s() {
        assert_eq!(select_render_outcome(None, true), RenderOutcome::Render);
    }
}
