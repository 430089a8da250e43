// ABOUTME: Difficulty scoring engine for tourist district congestion signals
// ABOUTME: Weighted composite, validated level band table, and localized advisory catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Visit Intelligence
//!
//! Pure, synchronous scoring of [`SignalReading`](visit_core::models::SignalReading)s.
//! Nothing in this crate reads the clock, touches I/O or keeps state between
//! calls, so a single [`ScoringEngine`] can be shared by every request.
//!
//! ```rust
//! use visit_core::models::{Level, SignalReading};
//! use visit_intelligence::ScoringEngine;
//!
//! let engine = ScoringEngine::standard();
//! let assessment = engine.assess(&SignalReading::new(0.65, 0.58));
//! assert_eq!(assessment.score, 62);
//! assert_eq!(assessment.level, Level::Hard);
//! ```

/// Level band table and classification
pub mod bands;
/// Scoring engine entry point
pub mod engine;
/// Scoring configuration errors
pub mod errors;
/// Advisory message templates
pub mod messages;
/// Composite weighting policy
pub mod policy;

pub use bands::{LevelBand, LevelBands};
pub use engine::ScoringEngine;
pub use errors::ScoringError;
pub use messages::{synthetic_data_notice, MessageCatalog};
pub use policy::ScoringPolicy;
