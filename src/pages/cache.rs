//! Rendered page cache with stale-while-revalidate bookkeeping.
//!
//! # Responsibilities
//! - Hold rendered pages keyed by full request path
//! - Track entry age against the revalidate interval
//! - Guarantee at most one in-flight revalidation per path
//! - Track first-request (fallback) resolutions so concurrent requests
//!   for the same uncached path get a placeholder instead of piling up
//!
//! # Design Decisions
//! - Stale entries are still served; freshness arrives in the background
//! - The at-most-once property holds per path per process; nothing is
//!   coordinated across processes
//! - A cached not-found page is a valid entry and revalidates like any
//!   other (the page may have been published since)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::observability::metrics;

/// A rendered page held in the cache.
#[derive(Clone)]
pub struct CachedPage {
    /// Rendered HTML, served as-is.
    pub html: String,

    /// Whether a document backed this render (false for cached 404s).
    pub found: bool,

    rendered_at: Instant,
    revalidating: Arc<AtomicBool>,
}

impl CachedPage {
    /// Age of the entry since it was rendered.
    pub fn age(&self) -> Duration {
        self.rendered_at.elapsed()
    }
}

/// Concurrent cache of rendered pages.
#[derive(Clone)]
pub struct PageCache {
    entries: Arc<DashMap<String, CachedPage>>,
    resolving: Arc<DashMap<String, Instant>>,
    revalidate_after: Duration,
}

impl PageCache {
    /// Create a cache with the given stale-while-revalidate interval.
    pub fn new(revalidate_after: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            resolving: Arc::new(DashMap::new()),
            revalidate_after,
        }
    }

    /// Look up a rendered page.
    pub fn get(&self, path: &str) -> Option<CachedPage> {
        let entry = self.entries.get(path).map(|r| r.value().clone());
        metrics::record_cache_lookup(entry.is_some());
        entry
    }

    /// Insert or replace a rendered page. Resets age and clears any
    /// in-flight markers for the path.
    pub fn insert(&self, path: &str, html: String, found: bool) {
        self.entries.insert(
            path.to_string(),
            CachedPage {
                html,
                found,
                rendered_at: Instant::now(),
                revalidating: Arc::new(AtomicBool::new(false)),
            },
        );
        self.resolving.remove(path);
        metrics::record_cache_size(self.entries.len());
    }

    /// Whether an entry is old enough to regenerate.
    pub fn is_stale(&self, entry: &CachedPage) -> bool {
        entry.age() >= self.revalidate_after
    }

    /// Claim the revalidation slot for a stale entry.
    ///
    /// Returns true for exactly one caller until the entry is replaced
    /// or the claim is released.
    pub fn begin_revalidate(&self, entry: &CachedPage) -> bool {
        entry
            .revalidating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release a revalidation claim after a failed attempt, so a later
    /// request can try again. The stale entry stays served meanwhile.
    pub fn abort_revalidate(&self, path: &str) {
        if let Some(entry) = self.entries.get(path) {
            entry.revalidating.store(false, Ordering::Release);
        }
    }

    /// Claim the first-request resolution slot for an uncached path.
    ///
    /// Returns `None` when another request is already resolving it. The
    /// returned guard releases the slot on drop unless the resolution
    /// completed with an insert, so a handler future dropped mid-flight
    /// (client disconnect, request timeout) cannot wedge the path on the
    /// loading placeholder.
    pub fn begin_resolve(&self, path: &str) -> Option<ResolveGuard> {
        use dashmap::mapref::entry::Entry;
        match self.resolving.entry(path.to_string()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(Instant::now());
                Some(ResolveGuard {
                    cache: self.clone(),
                    path: path.to_string(),
                    complete: false,
                })
            }
        }
    }

    /// Number of cached pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Claim on a path's first-request resolution slot.
pub struct ResolveGuard {
    cache: PageCache,
    path: String,
    complete: bool,
}

impl ResolveGuard {
    /// Mark the resolution as completed. The slot was already released by
    /// the accompanying [`PageCache::insert`]; dropping becomes a no-op.
    pub fn complete(mut self) {
        self.complete = true;
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        if self.complete {
            return;
        }
        if let Some((_, claimed)) = self.cache.resolving.remove(&self.path) {
            tracing::debug!(
                path = %self.path,
                held_ms = claimed.elapsed().as_millis() as u64,
                "Released resolution claim without a cache entry"
            );
        }
    }
}
