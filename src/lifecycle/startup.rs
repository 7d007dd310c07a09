//! Startup orchestration.
//!
//! # Responsibilities
//! - Build and validate the route table
//! - Start the metrics exporter when enabled
//! - Hand a ready-to-run server back to the caller
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listeners start last (traffic only when ready)

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::routing::{InvalidRouteTable, RouteTable};
use crate::urls;
use crate::views::View;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Routes(#[from] InvalidRouteTable),
    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),
    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Build the site's route table, logging its contents.
pub fn build_routes() -> Result<Arc<RouteTable<View>>, StartupError> {
    let routes = urls::build_route_table()?;
    for entry in routes.iter() {
        tracing::debug!(
            pattern = %entry.pattern(),
            name = entry.name(),
            view = %entry.handler(),
            "Route registered"
        );
    }
    tracing::info!(routes = routes.len(), "Route table built");
    metrics::record_route_table(routes.len());
    Ok(Arc::new(routes))
}

/// Prepare every subsystem ahead of binding the listener.
///
/// Must be called from within a Tokio runtime when metrics are enabled.
pub fn prepare(config: AppConfig) -> Result<HttpServer, StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let routes = build_routes()?;
    Ok(HttpServer::new(config, routes))
}
