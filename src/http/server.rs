//! HTTP server setup and page serving.
//!
//! # Responsibilities
//! - Create the Axum router: catch-all page route plus health probe
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve cached pages with stale-while-revalidate regeneration
//! - Resolve unknown paths on first request (fallback)
//! - Bypass the cache for editing/preview requests
//! - Graceful shutdown
//!
//! # Design Decisions
//! - A request never blocks on regeneration: stale entries are served
//!   while one background task refreshes them
//! - Requests racing with a path's first resolution get a transient
//!   loading placeholder instead of a second upstream call
//! - Cached not-found pages answer 404 with a noindex marker

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::{GatewayConfig, RegenerationConfig};
use crate::content::document::PageDocument;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::pages::cache::PageCache;
use crate::pages::render;
use crate::pages::resolver::PageResolver;
use crate::routing::outcome::{select_render_outcome, RenderOutcome};
use crate::routing::path::RoutePath;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<PageResolver>,
    pub cache: PageCache,
    pub regeneration: RegenerationConfig,
    pub shutdown: Arc<Shutdown>,
}

/// HTTP server for the page gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig, resolver: PageResolver) -> Self {
        let cache = PageCache::new(Duration::from_secs(config.regeneration.revalidate_secs));

        let state = AppState {
            resolver: Arc::new(resolver),
            cache,
            regeneration: config.regeneration.clone(),
            shutdown: Arc::new(Shutdown::new()),
        };

        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/healthz", get(health_handler))
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            revalidate_secs = self.config.regeneration.revalidate_secs,
            fallback = self.config.regeneration.fallback,
            "HTTP server starting"
        );

        // Runtime analog of build-time static generation
        if self.config.regeneration.warm_on_start {
            tokio::spawn(warm_cache(self.state.clone()));
        }

        let shutdown = self.state.shutdown.clone();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                shutdown.trigger();
                tracing::info!(
                    pending_tasks = shutdown.listener_count(),
                    "Background revalidations notified"
                );
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}

/// Main page handler. Parses the route, consults the cache, and falls
/// back to on-demand resolution.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let started = Instant::now();
    let route = RoutePath::parse(uri.path());
    let path = route.request_path();

    // Editor probes draft content; never cache it, never 404 it
    if is_editing_or_preview(&uri) {
        return match state.resolver.resolve_page(&route).await {
            Ok(document) => {
                let html = render::render_page(&route, document.as_ref());
                respond(StatusCode::OK, html, false, started)
            }
            Err(e) => upstream_error(&path, e, started),
        };
    }

    if let Some(entry) = state.cache.get(&path) {
        if state.cache.is_stale(&entry) && state.cache.begin_revalidate(&entry) {
            spawn_revalidation(state.clone(), route, path.clone());
        }
        let status = if entry.found {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        return respond(status, entry.html, !entry.found, started);
    }

    if !state.regeneration.fallback {
        return respond(
            StatusCode::NOT_FOUND,
            render::render_not_found(),
            true,
            started,
        );
    }

    // First request for an unknown path resolves inline; concurrent
    // requests get the placeholder until the entry lands in the cache.
    // The guard releases the claim if this future is dropped mid-resolve.
    let Some(resolve_guard) = state.cache.begin_resolve(&path) else {
        let mut response = respond(StatusCode::OK, render::render_loading(), true, started);
        response
            .headers_mut()
            .insert("retry-after", HeaderValue::from_static("1"));
        return response;
    };

    match state.resolver.resolve_page(&route).await {
        Ok(document) => {
            let (html, found) = render_for(&route, document.as_ref());
            state.cache.insert(&path, html.clone(), found);
            resolve_guard.complete();
            let status = if found {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            respond(status, html, !found, started)
        }
        Err(e) => upstream_error(&path, e, started),
    }
}

/// Render a resolved document for live serving (not editing/preview).
fn render_for(route: &RoutePath, document: Option<&PageDocument>) -> (String, bool) {
    match select_render_outcome(document, false) {
        RenderOutcome::Render => (render::render_page(route, document), true),
        RenderOutcome::NotFound => (render::render_not_found(), false),
    }
}

/// Whether the request comes from the CMS editor or a preview link.
fn is_editing_or_preview(uri: &Uri) -> bool {
    let Some(query) = uri.query() else {
        return false;
    };
    url::form_urlencoded::parse(query.as_bytes()).any(|(k, _)| k == "preview" || k == "editing")
}

fn respond(status: StatusCode, html: String, noindex: bool, started: Instant) -> Response {
    metrics::record_page_served(status.as_u16(), started);
    let mut response = (status, Html(html)).into_response();
    if noindex {
        response
            .headers_mut()
            .insert("x-robots-tag", HeaderValue::from_static("noindex"));
    }
    response
}

fn upstream_error(path: &str, error: crate::content::ContentError, started: Instant) -> Response {
    tracing::error!(path = %path, error = %error, "Page resolution failed");
    metrics::record_page_served(StatusCode::BAD_GATEWAY.as_u16(), started);
    (StatusCode::BAD_GATEWAY, "Content service unavailable").into_response()
}

/// Kick off the single background regeneration for a stale entry.
fn spawn_revalidation(state: AppState, route: RoutePath, path: String) {
    let mut shutdown_rx = state.shutdown.subscribe();
    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                state.cache.abort_revalidate(&path);
            }
            () = regenerate(&state, &route, &path) => {}
        }
    });
}

/// Re-resolve and re-render one page, replacing its cache entry.
///
/// On failure the stale entry stays served and the claim is released so
/// a later request can try again.
async fn regenerate(state: &AppState, route: &RoutePath, path: &str) {
    match state.resolver.resolve_page(route).await {
        Ok(document) => {
            let (html, found) = render_for(route, document.as_ref());
            state.cache.insert(path, html, found);
            metrics::record_revalidation("ok");
            tracing::debug!(path = %path, found, "Page regenerated");
        }
        Err(e) => {
            state.cache.abort_revalidate(path);
            metrics::record_revalidation("error");
            tracing::warn!(path = %path, error = %e, "Regeneration failed, serving stale copy");
        }
    }
}

/// Pre-resolve all known paths into the page cache.
async fn warm_cache(state: AppState) {
    let paths = match state.resolver.known_paths().await {
        Ok(paths) => paths,
        Err(e) => {
            tracing::error!(error = %e, "Cache warm failed, pages will resolve on demand");
            return;
        }
    };

    let mut warmed = 0usize;
    for path in &paths {
        let route = RoutePath::parse(path);
        match state.resolver.resolve_page(&route).await {
            Ok(document) => {
                let (html, found) = render_for(&route, document.as_ref());
                state.cache.insert(&route.request_path(), html, found);
                warmed += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Skipping warm for page");
            }
        }
    }

    tracing::info!(warmed, total = paths.len(), "Page cache warmed");
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
