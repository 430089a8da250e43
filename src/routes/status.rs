// ABOUTME: Difficulty status route handler serving the current and +30 minute report
// ABOUTME: Thin axum handler delegating to the status service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use visit_core::errors::AppError;

/// Status routes
pub struct StatusRoutes;

impl StatusRoutes {
    /// Create the status route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/status", get(Self::handle_status))
            .with_state(resources)
    }

    /// Handle `GET /api/status`; takes no parameters
    async fn handle_status(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let report = resources.status.build_report().await?;
        Ok((StatusCode::OK, Json(report)).into_response())
    }
}
