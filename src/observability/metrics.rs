//! Metrics collection and exposition.
//!
//! # Metrics
//! - `quote_proxy_requests_total` (counter): requests by method, status
//! - `quote_proxy_request_duration_seconds` (histogram): latency distribution
//! - `quote_proxy_upstream_failures_total` (counter): failed upstream fetches
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Exporter is opt-in via config; recording without it is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "quote_proxy_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!("quote_proxy_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

/// Record a failed upstream fetch.
pub fn record_upstream_failure() {
    metrics::counter!("quote_proxy_upstream_failures_total").increment(1);
}
