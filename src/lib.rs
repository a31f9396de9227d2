//! CMS Page Gateway
//!
//! An HTTP gateway that serves pages authored in a hosted visual CMS.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────────┐
//!                     │                  PAGE GATEWAY                  │
//!                     │                                                │
//!     Page Request    │  ┌─────────┐    ┌──────────┐    ┌───────────┐ │
//!     ────────────────┼─▶│  http   │───▶│ routing  │───▶│   pages   │ │
//!                     │  │ server  │    │  locale/ │    │ cache+SWR │ │
//!                     │  └─────────┘    │ outcome  │    └─────┬─────┘ │
//!                     │                 └──────────┘          │       │
//!                     │                                       ▼       │
//!     Rendered HTML   │  ┌─────────┐                   ┌───────────┐ │      Hosted
//!     ◀───────────────┼──│ render  │◀──────────────────│  content  │─┼───▶  CMS
//!                     │  │  shell  │                   │  client   │ │      (read only)
//!                     │  └─────────┘                   └───────────┘ │
//!                     │                                              │
//!                     │  ┌──────────────────────────────────────────┐│
//!                     │  │          Cross-Cutting Concerns          ││
//!                     │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ ││
//!                     │  │  │ config │ │observability│ │lifecycle │ ││
//!                     │  │  └────────┘ └─────────────┘ └──────────┘ ││
//!                     │  └──────────────────────────────────────────┘│
//!                     └────────────────────────────────────────────────┘
//! ```
//!
//! The gateway owns no content. It resolves a request path into a locale
//! plus a content path, asks the CMS for the matching page document, and
//! serves a rendered shell around it. Known pages can be generated ahead
//! of time (`build`); unknown paths are resolved on first request and then
//! cached with stale-while-revalidate regeneration.

// Core subsystems
pub mod config;
pub mod content;
pub mod http;
pub mod pages;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pages::PageResolver;
