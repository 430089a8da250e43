// ABOUTME: Integration tests for liveness, readiness, and CORS preflight handling
// ABOUTME: Health routes never touch the scoring path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;
mod helpers;

use common::{clock_at, noiseless_config, router_with_clock};
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

fn app() -> axum::Router {
    router_with_clock(noiseless_config(), clock_at("2026-10-12T13:00:00+09:00"))
}

#[tokio::test]
async fn test_health_reports_service_name() {
    let response = AxumTestRequest::get("/health").send(app()).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "visit-difficulty-server");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_ready() {
    let body: Value = AxumTestRequest::get("/ready").send(app()).await.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_by_default() {
    let response = AxumTestRequest::options("/api/status")
        .header("origin", "https://example.org")
        .header("access-control-request-method", "GET")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}
