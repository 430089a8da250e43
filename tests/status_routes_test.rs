// ABOUTME: Integration tests for the status route and cross-cutting middleware
// ABOUTME: Pins the clock and silences noise to check exact report values over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

mod common;
mod helpers;

use common::{clock_at, noiseless_config, router_with_clock, router_with_provider};
use helpers::axum_test::AxumTestRequest;
use helpers::providers::{FailingSignalProvider, FixedSignalProvider};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;
use visit_core::models::SignalReading;
use visit_difficulty_server::config::ServerConfig;

const MONDAY_LUNCH: &str = "2026-10-12T13:00:00+09:00";

const REPORT_FIELDS: [&str; 13] = [
    "area",
    "area_kr",
    "now_kst",
    "traffic_index_now",
    "traffic_index_forecast_30m",
    "parking_pressure_now",
    "difficulty_now_0_100",
    "difficulty_30m_0_100",
    "level_now",
    "level_30m",
    "message",
    "message_30m",
    "notes",
];

#[tokio::test]
async fn test_status_report_has_exactly_the_wire_fields() {
    let app = router_with_clock(noiseless_config(), clock_at(MONDAY_LUNCH));

    let response = AxumTestRequest::get("/api/status").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let object = body.as_object().expect("report is a JSON object");
    assert_eq!(object.len(), REPORT_FIELDS.len());
    for field in REPORT_FIELDS {
        assert!(object.contains_key(field), "missing field {field}");
    }
}

#[tokio::test]
async fn test_status_report_values_for_monday_lunch() {
    let app = router_with_clock(noiseless_config(), clock_at(MONDAY_LUNCH));

    let body: Value = AxumTestRequest::get("/api/status").send(app).await.json();

    assert_eq!(body["area"], "Jeonju Hanok Village");
    assert_eq!(body["area_kr"], "전주 한옥마을");
    assert_eq!(body["now_kst"], "2026-10-12T13:00:00+09:00");
    assert_eq!(body["traffic_index_now"].as_f64().unwrap(), 0.51);
    assert_eq!(body["parking_pressure_now"].as_f64().unwrap(), 0.459);
    assert_eq!(body["traffic_index_forecast_30m"].as_f64().unwrap(), 0.51);
    assert_eq!(body["difficulty_now_0_100"], 49);
    assert_eq!(body["difficulty_30m_0_100"], 49);
    assert_eq!(body["level_now"], "MODERATE");
    assert_eq!(body["level_30m"], "MODERATE");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("현재 전주 한옥마을"));
    assert!(body["message_30m"]
        .as_str()
        .unwrap()
        .starts_with("30분 뒤 전주 한옥마을"));
    assert!(body["notes"].as_str().unwrap().contains("더미"));
}

#[tokio::test]
async fn test_status_is_stable_within_a_five_minute_window() {
    let first: Value = AxumTestRequest::get("/api/status")
        .send(router_with_clock(
            ServerConfig::default(),
            clock_at("2026-10-12T15:01:00+09:00"),
        ))
        .await
        .json();
    let second: Value = AxumTestRequest::get("/api/status")
        .send(router_with_clock(
            ServerConfig::default(),
            clock_at("2026-10-12T15:04:59+09:00"),
        ))
        .await
        .json();

    assert_eq!(first["traffic_index_now"], second["traffic_index_now"]);
    assert_eq!(first["parking_pressure_now"], second["parking_pressure_now"]);
    assert_eq!(first["difficulty_now_0_100"], second["difficulty_now_0_100"]);
}

#[tokio::test]
async fn test_status_scores_fixed_readings() {
    let provider = Arc::new(FixedSignalProvider::new(
        SignalReading::new(0.65, 0.58),
        SignalReading::new(0.9, 0.95),
    ));
    let app = router_with_provider(provider.clone(), clock_at(MONDAY_LUNCH));

    let body: Value = AxumTestRequest::get("/api/status").send(app).await.json();

    assert_eq!(body["difficulty_now_0_100"], 62);
    assert_eq!(body["level_now"], "HARD");
    assert_eq!(body["difficulty_30m_0_100"], 92);
    assert_eq!(body["level_30m"], "VERY_HARD");
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_provider_failure_returns_service_unavailable() {
    let app = router_with_provider(Arc::new(FailingSignalProvider), clock_at(MONDAY_LUNCH));

    let response = AxumTestRequest::get("/api/status").send(app).await;
    assert_eq!(response.status(), 503);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_UNAVAILABLE");
    assert!(body.get("area").is_none());
}

#[tokio::test]
async fn test_health_survives_provider_failure() {
    let app = router_with_provider(Arc::new(FailingSignalProvider), clock_at(MONDAY_LUNCH));

    let health = AxumTestRequest::get("/health").send(app.clone()).await;
    assert_eq!(health.status(), 200);
    let body: Value = health.json();
    assert_eq!(body["status"], "healthy");

    let ready = AxumTestRequest::get("/ready").send(app).await;
    assert_eq!(ready.status(), 200);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = router_with_clock(noiseless_config(), clock_at(MONDAY_LUNCH));

    let response = AxumTestRequest::get("/health").send(app).await;
    let request_id = response.header("x-request-id").expect("request id header");
    assert!(Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_client_request_id_is_propagated() {
    let app = router_with_clock(noiseless_config(), clock_at(MONDAY_LUNCH));

    let response = AxumTestRequest::get("/api/status")
        .header("x-request-id", "trace-me-123")
        .send(app)
        .await;
    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-me-123"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = router_with_clock(noiseless_config(), clock_at(MONDAY_LUNCH));
    let response = AxumTestRequest::get("/api/nope").send(app).await;
    assert_eq!(response.status(), 404);
}
