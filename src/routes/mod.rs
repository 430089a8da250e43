// ABOUTME: Route module organization for the visit difficulty HTTP endpoints
// ABOUTME: Groups health, status, and area catalog routes by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the service layer.

/// Area catalog routes
pub mod areas;
/// Liveness and readiness routes
pub mod health;
/// Difficulty status routes
pub mod status;

pub use areas::AreaRoutes;
pub use health::HealthRoutes;
pub use status::StatusRoutes;
