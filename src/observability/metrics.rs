//! Metrics collection and exposition.
//!
//! # Metrics
//! - `eventora_requests_total` (counter): requests by method, status, route
//! - `eventora_request_duration_seconds` (histogram): latency by method, route
//! - `eventora_routes_registered` (gauge): size of the route table
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - Unmatched requests use the route label `none`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Route label for requests no route matched.
pub const UNMATCHED_ROUTE: &str = "none";

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("route", route.to_string()),
    ];
    metrics::counter!("eventora_requests_total", &labels).increment(1);

    let labels = [("method", method.to_string()), ("route", route.to_string())];
    metrics::histogram!("eventora_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_route_table(size: usize) {
    metrics::gauge!("eventora_routes_registered").set(size as f64);
}
