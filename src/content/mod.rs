//! Content service client subsystem.
//!
//! # Data Flow
//! ```text
//! PageQuery / ListQuery
//!     → client.rs (HTTP GET against the CMS query API)
//!     → envelope decode ({"results": [...]})
//!     → document.rs (opaque PageDocument wrappers)
//! ```
//!
//! # Design Decisions
//! - The CMS is the sole source of truth and is never written to
//! - Documents are opaque JSON; only `data.url` and `data.title` are read
//! - "No matching document" is a normal result (Ok(None)), not an error
//! - Locale is an explicit query parameter on every call; the client
//!   holds no ambient user-attribute state

pub mod client;
pub mod document;
pub mod query;

pub use client::{ContentError, HttpContentClient};
pub use document::PageDocument;
pub use query::{ListQuery, PageQuery};
