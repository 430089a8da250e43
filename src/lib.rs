// ABOUTME: Main library entry point for the visit difficulty server
// ABOUTME: Serves traffic and parking difficulty scores for Jeonju tourist areas over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Visit Difficulty Server
//!
//! Answers one question for a tourist district: how hard is it to visit right
//! now, and how hard will it be in thirty minutes?
//!
//! ## Architecture
//!
//! - **visit-core**: shared models, area catalog, clock, and errors
//! - **visit-providers**: the `SignalProvider` trait and the synthetic source
//! - **visit-intelligence**: the pure scoring engine and message catalog
//! - this crate: configuration, logging, middleware, and the axum routes
//!
//! ## Endpoints
//!
//! - `GET /api/status`: current and +30 minute difficulty report
//! - `GET /api/areas?search=`: supported areas
//! - `GET /health`, `GET /ready`: liveness and readiness

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: request ids, request spans, CORS
pub mod middleware;

/// Shared state handed to route handlers
pub mod resources;

/// Route definitions
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Domain services behind the handlers
pub mod services;

pub use resources::ServerResources;
pub use server::build_router;
