//! HTTP surface for the action server
//!
//! Speaks the conventional action-server wire contract: the dialogue
//! framework POSTs a tracker snapshot to `/webhook` and receives events
//! plus bot messages back.

pub mod health;
pub mod webhook;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::resolver::Resolver;
use crate::{Error, Result};

/// Shared state for webhook handlers
#[derive(Debug)]
pub struct ApiState {
    pub resolver: Resolver,
}

/// The action server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
}

impl ApiServer {
    /// Create a server for the given resolver and port
    #[must_use]
    pub fn new(resolver: Resolver, port: u16) -> Self {
        Self {
            state: Arc::new(ApiState { resolver }),
            port,
        }
    }

    /// Build the router with all routes and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        // CORS for browser-hosted framework frontends
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(webhook::router(self.state.clone()))
            .merge(health::router())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the action server until interrupted
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Config(format!("failed to bind action server: {e}")))?;

        tracing::info!(port = self.port, "action server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| Error::Config(format!("action server error: {e}")))?;

        Ok(())
    }
}
