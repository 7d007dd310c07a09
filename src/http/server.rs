//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatcher and optional static assets
//! - Wire up middleware (tracing, request ID, timeout, body limit)
//! - Dispatch requests through the route table to views
//! - Record per-request metrics
//! - Serve until shutdown is broadcast

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::http::response::AppError;
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::routing::{normalize_path, RouteTable};
use crate::views::{PageContext, View};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable<View>>,
}

/// HTTP server hosting the route table.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    routes: Arc<RouteTable<View>>,
}

impl HttpServer {
    pub fn new(config: AppConfig, routes: Arc<RouteTable<View>>) -> Self {
        let state = AppState {
            routes: routes.clone(),
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            routes,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", any(dispatch))
            .route("/{*path}", any(dispatch))
            .with_state(state);

        if let Some(dir) = &config.assets.static_dir {
            router = router.nest_service("/static", ServeDir::new(dir));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(RequestIdLayer::set())
                .layer(TraceLayer::new_for_http())
                .layer(RequestIdLayer::propagate())
                .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable<View> {
        &self.routes
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Resolve the request path and hand the request to its view.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().unwrap_or("unknown").to_string();
    let method = request.method().clone();
    let raw_path = request.uri().path();

    let resolved = normalize_path(raw_path).and_then(|path| state.routes.resolve(&path));

    let (route, response) = match resolved {
        Ok(matched) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %raw_path,
                route = matched.name(),
                "Route matched"
            );
            let ctx = PageContext {
                routes: &state.routes,
                method: &method,
                params: matched.params(),
                request_id: &request_id,
            };
            let response = matched
                .handler()
                .render(&ctx)
                .unwrap_or_else(IntoResponse::into_response);
            (matched.name(), response)
        }
        Err(not_found) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %raw_path,
                "No route matched"
            );
            (
                metrics::UNMATCHED_ROUTE,
                AppError::from(not_found).into_response(),
            )
        }
    };

    metrics::record_request(
        method.as_str(),
        response.status().as_u16(),
        route,
        start_time,
    );
    response
}
