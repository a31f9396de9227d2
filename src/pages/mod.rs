//! Page resolution, caching, and rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Build time (cms-gateway build):
//!     resolver.rs  enumerate known paths
//!     → resolve each path (locale + content path → document)
//!     → render.rs (HTML shell)
//!     → prerender.rs writes <out>/<path>/index.html
//!
//! Request time (cms-gateway serve):
//!     cache.rs lookup
//!     → hit: serve immediately; stale entries trigger at most one
//!       background re-resolution (stale-while-revalidate)
//!     → miss: resolver.rs resolves on demand (fallback), result cached
//! ```
//!
//! # Design Decisions
//! - One resolution function shared by both entry points
//! - Cache-busting on every resolution: regenerated pages are always
//!   fresh at the cost of upstream latency
//! - Rendering is presentational glue only; the document stays opaque

pub mod cache;
pub mod prerender;
pub mod render;
pub mod resolver;

pub use cache::{CachedPage, PageCache, ResolveGuard};
pub use prerender::{BuildSummary, Prerenderer, PrerenderError};
pub use resolver::PageResolver;
