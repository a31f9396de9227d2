//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path ("/fr/blog/post-1")
//!     → path.rs (split locale off the first segment,
//!                derive the '/'-prefixed content path)
//!     → RoutePath { locale: Some("fr"), content_path: "/blog/post-1" }
//!
//! Resolved document + request context
//!     → outcome.rs (document presence × editing/preview)
//!     → Render | NotFound
//! ```
//!
//! # Design Decisions
//! - Pure functions, no I/O: this is the gateway's only local algorithm
//! - Locale codes are opaque; unknown codes pass through to the CMS
//! - Deterministic: same segments always derive the same RoutePath

pub mod outcome;
pub mod path;

pub use outcome::{select_render_outcome, RenderOutcome};
pub use path::RoutePath;
