// ABOUTME: Core types and constants for the visit difficulty service
// ABOUTME: Foundation crate with domain models, area catalog, KST clock, and unified errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Visit Core
//!
//! Foundation crate providing the shared vocabulary of the visit difficulty
//! service. The scoring engine, the signal providers and the HTTP server all
//! speak in these types, so this crate changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service-wide constants organized by domain
//! - **models**: Signal readings, levels, assessments, areas and the status report
//! - **time**: KST offset helpers and the `Clock` abstraction

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Service constants organized by domain
pub mod constants;

/// Domain models shared across the workspace
pub mod models;

/// Korea Standard Time helpers and injectable clocks
pub mod time;
