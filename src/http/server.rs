//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the page handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics, CORS)
//! - Serve on a listener until the shutdown signal fires

use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::FrontendConfig;
use crate::http::request::MakeRequestUuidV4;
use crate::lifecycle::shutdown::wait_for;
use crate::observability::metrics::track_requests;
use crate::pages::setup_pages_router;
use crate::security::with_cors;

/// HTTP server for the front-end pages.
pub struct HttpServer {
    router: Router,
    config: FrontendConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FrontendConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// CORS is the outermost layer so that timeouts, 404s and 405s are
    /// covered as well.
    #[allow(deprecated)]
    fn build_router(config: &FrontendConfig) -> Router {
        let router = setup_pages_router()
            .layer(middleware::from_fn(track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4));
        with_cors(router)
    }

    /// A handle to the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
