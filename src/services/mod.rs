// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Keeps report assembly independent of the HTTP framework
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! Route handlers stay thin and delegate here, so the same assembly logic can
//! be exercised directly in tests without going through the router.

/// Status report assembly: provider calls, scoring, and message rendering
pub mod status;

pub use status::StatusService;
