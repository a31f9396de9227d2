//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all page route)
//!     → request.rs (attach request ID)
//!     → routing (locale + content path)
//!     → page cache / resolver
//!     → rendered HTML response
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
