// ABOUTME: Congestion signal providers for tourist areas behind a single async trait
// ABOUTME: Ships the rule-based synthetic provider with its hour-of-day baseline curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! Signal provider implementations and core abstractions.
//!
//! The scoring engine never knows where a [`SignalReading`] came from. Any
//! source that can answer "how busy is it now" and "how busy will it be in
//! thirty minutes" implements [`SignalProvider`] and can be swapped in
//! without touching the engine or the HTTP layer.
//!
//! [`SignalReading`]: visit_core::models::SignalReading

pub use visit_core::models;

/// Core provider trait
pub mod core;
/// Provider error type
pub mod errors;

/// Baseline traffic and trend curves
pub mod curve;

/// Deterministic rule-based provider
pub mod synthetic;

pub use self::core::SignalProvider;
pub use errors::ProviderError;
pub use synthetic::{SyntheticSignalConfig, SyntheticSignalProvider};
