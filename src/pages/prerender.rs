//! Build-time static page generation.
//!
//! # Responsibilities
//! - Enumerate every known page path
//! - Resolve and render each path through the shared resolver
//! - Write `<out>/<path>/index.html` files ready for static hosting
//!
//! # Design Decisions
//! - Enumeration failure aborts the build: generation cannot proceed
//!   without the path list
//! - Per-path resolution failure aborts too; partial output would hide
//!   upstream problems
//! - Paths that cannot map to a safe output location are rejected

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::content::client::ContentError;
use crate::pages::render;
use crate::pages::resolver::PageResolver;
use crate::routing::outcome::{select_render_outcome, RenderOutcome};
use crate::routing::path::RoutePath;

/// Error type for static generation.
#[derive(Debug, Error)]
pub enum PrerenderError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("refusing to write unsafe output path for page '{0}'")]
    UnsafePath(String),
}

/// Counts reported after a successful build.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildSummary {
    /// Pages rendered with a backing document.
    pub pages: usize,

    /// Enumerated paths whose document had vanished by resolution time;
    /// these get the not-found page.
    pub not_found: usize,
}

/// Generates the static site from the content service.
pub struct Prerenderer {
    resolver: PageResolver,
}

impl Prerenderer {
    /// Create a prerenderer over the shared resolver.
    pub fn new(resolver: PageResolver) -> Self {
        Self { resolver }
    }

    /// Generate every known page into `out_dir`.
    pub async fn build(&self, out_dir: &Path) -> Result<BuildSummary, PrerenderError> {
        let paths = self.resolver.known_paths().await?;
        let mut summary = BuildSummary::default();

        for path in &paths {
            let route = RoutePath::parse(path);
            let document = self.resolver.resolve_page(&route).await?;

            let html = match select_render_outcome(document.as_ref(), false) {
                RenderOutcome::Render => {
                    summary.pages += 1;
                    render::render_page(&route, document.as_ref())
                }
                RenderOutcome::NotFound => {
                    tracing::warn!(path = %path, "Enumerated page no longer resolves");
                    summary.not_found += 1;
                    render::render_not_found()
                }
            };

            let file = output_file(out_dir, &route)
                .ok_or_else(|| PrerenderError::UnsafePath(path.clone()))?;
            write_page(&file, &html)?;
            tracing::debug!(path = %path, file = %file.display(), "Wrote page");
        }

        tracing::info!(
            pages = summary.pages,
            not_found = summary.not_found,
            out_dir = %out_dir.display(),
            "Static generation complete"
        );
        Ok(summary)
    }
}

/// Map a route to its output file, rejecting traversal segments.
fn output_file(out_dir: &Path, route: &RoutePath) -> Option<PathBuf> {
    let mut dir = out_dir.to_path_buf();
    let request_path = route.request_path();

    for segment in request_path.split('/').filter(|s| !s.is_empty()) {
        if segment == ".." || segment == "." {
            return None;
        }
        dir.push(segment);
    }

    Some(dir.join("index.html"))
}

fn write_page(file: &Path, html: &str) -> Result<(), PrerenderError> {
    let io_err = |source| PrerenderError::Io {
        path: file.to_path_buf(),
        source,
    };

    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(file, html).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_layout() {
        let out = Path::new("/tmp/site");

        let root = RoutePath::parse("/");
        assert_eq!(
            output_file(out, &root).unwrap(),
            PathBuf::from("/tmp/site/index.html")
        );

        let localized = RoutePath::parse("/fr/about");
        assert_eq!(
            output_file(out, &localized).unwrap(),
            PathBuf::from("/tmp/site/fr/about/index.html")
        );
    }

    #[test]
    fn test_traversal_segments_rejected() {
        let out = Path::new("/tmp/site");
        let route = RoutePath::from_segments(["en", "..", "etc"]);
        assert!(output_file(out, &route).is_none());
    }
}
