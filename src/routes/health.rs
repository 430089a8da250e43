// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness and readiness endpoints that never touch the scoring pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health check routes
//!
//! The router returned here holds no state, so a failing signal provider or
//! scoring engine cannot make liveness checks fail.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use visit_core::constants::service_names;
use visit_core::time::now_kst;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::VISIT_DIFFICULTY_SERVER,
            "timestamp": now_kst().to_rfc3339()
        }))
    }

    async fn handle_ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": now_kst().to_rfc3339()
        }))
    }
}
