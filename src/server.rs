// ABOUTME: HTTP server assembly: router composition, middleware stack, and serve loop
// ABOUTME: Binds the configured address and drains connections on Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::middleware::{create_request_span, request_id_layers, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{AreaRoutes, HealthRoutes, StatusRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

/// Build the complete application router
///
/// Health routes are merged without state, so they answer even when the
/// status pipeline is failing.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AreaRoutes::routes())
        .merge(StatusRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(create_request_span)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(propagate_request_id)
                .layer(cors),
        )
}

/// Serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Listening on http://{address}");
    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
    }
}
