// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, pinned clocks, and router construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `visit_difficulty_server`

use axum::Router;
use chrono::{DateTime, FixedOffset};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use visit_core::time::{Clock, FixedClock};
use visit_difficulty_server::config::ServerConfig;
use visit_difficulty_server::{build_router, ServerResources};
use visit_providers::SignalProvider;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse an RFC 3339 instant
pub fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid RFC 3339 timestamp")
}

/// Clock pinned to an instant
pub fn clock_at(rfc3339: &str) -> Arc<dyn Clock> {
    Arc::new(FixedClock(at(rfc3339)))
}

/// Configuration with noise switched off
pub fn noiseless_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.signals.jitter_amplitude = 0.0;
    config.signals.forecast_noise = 0.0;
    config
}

/// Router over the synthetic provider with a pinned clock
pub fn router_with_clock(config: ServerConfig, clock: Arc<dyn Clock>) -> Router {
    init_test_logging();
    let resources = ServerResources::builder()
        .with_config(config)
        .with_clock(clock)
        .build_arc()
        .expect("resources build");
    build_router(resources)
}

/// Router over an arbitrary provider with a pinned clock
pub fn router_with_provider(provider: Arc<dyn SignalProvider>, clock: Arc<dyn Clock>) -> Router {
    init_test_logging();
    let resources = ServerResources::builder()
        .with_config(ServerConfig::default())
        .with_provider(provider)
        .with_clock(clock)
        .build_arc()
        .expect("resources build");
    build_router(resources)
}
