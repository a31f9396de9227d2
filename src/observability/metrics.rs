//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_pages_served_total` (counter): responses by status
//! - `gateway_page_serve_duration_seconds` (histogram): serve latency
//! - `gateway_page_cache_lookups_total` (counter): lookups by result
//! - `gateway_page_cache_size` (gauge): cached page count
//! - `gateway_revalidations_total` (counter): background regenerations
//!   by outcome
//! - `gateway_content_errors_total` (counter): failed CMS calls by
//!   operation
//!
//! # Design Decisions
//! - Helpers are free functions so call sites stay one line
//! - Without an installed recorder every call is a no-op, so tests and
//!   the build subcommand need no metrics setup

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start metrics endpoint");
        }
    }

    metrics::describe_counter!(
        "gateway_pages_served_total",
        "Total page responses by status code"
    );
    metrics::describe_histogram!(
        "gateway_page_serve_duration_seconds",
        "Time from request receipt to response"
    );
    metrics::describe_counter!(
        "gateway_page_cache_lookups_total",
        "Page cache lookups by result"
    );
    metrics::describe_gauge!("gateway_page_cache_size", "Number of cached pages");
    metrics::describe_counter!(
        "gateway_revalidations_total",
        "Background page regenerations by outcome"
    );
    metrics::describe_counter!(
        "gateway_content_errors_total",
        "Failed content service calls by operation"
    );
}

/// Record a served page response.
pub fn record_page_served(status: u16, started: Instant) {
    metrics::counter!("gateway_pages_served_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("gateway_page_serve_duration_seconds")
        .record(started.elapsed().as_secs_f64());
}

/// Record a page cache lookup.
pub fn record_cache_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    metrics::counter!("gateway_page_cache_lookups_total", "result" => result).increment(1);
}

/// Record the cache size after a mutation.
pub fn record_cache_size(size: usize) {
    metrics::gauge!("gateway_page_cache_size").set(size as f64);
}

/// Record a background regeneration attempt.
pub fn record_revalidation(outcome: &'static str) {
    metrics::counter!("gateway_revalidations_total", "outcome" => outcome).increment(1);
}

/// Record a failed content service call.
pub fn record_content_error(operation: &'static str) {
    metrics::counter!("gateway_content_errors_total", "operation" => operation).increment(1);
}
