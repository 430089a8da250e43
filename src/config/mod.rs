// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration with typed sub-configs and CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the visit difficulty server
//!
//! All settings come from environment variables. The binary applies a small
//! number of command-line overrides on top.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, Environment, ScoringConfig, ServerConfig, SignalConfig, VisitConfig,
};
