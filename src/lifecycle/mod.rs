//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Init observability → Bind → Serve
//!
//! Shutdown:
//!     Ctrl+C → stop accepting → abandon background revalidations
//!     (they only write to the in-process cache) → exit
//! ```
//!
//! # Design Decisions
//! - Shutdown fans out through a broadcast channel; the server and every
//!   background revalidation task hold a receiver

pub mod shutdown;

pub use shutdown::Shutdown;
