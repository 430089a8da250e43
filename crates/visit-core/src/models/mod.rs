// ABOUTME: Domain models shared by the scoring engine, signal providers, and HTTP layer
// ABOUTME: Re-exports readings, levels, assessments, areas, locales, and the status report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain models
//!
//! All models are plain values: they are produced fresh per request, carry no
//! identity and are never persisted.

/// Tourist area catalog
pub mod area;
/// Difficulty assessment produced by the scoring engine
pub mod assessment;
/// Forecast horizon and message locale
pub mod horizon;
/// Ordered severity levels
pub mod level;
/// Aggregated status report in its wire shape
pub mod report;
/// Raw congestion signal readings
pub mod signal;

pub use area::{find_area, search_areas, Area, AREAS};
pub use assessment::DifficultyAssessment;
pub use horizon::{Horizon, Locale};
pub use level::Level;
pub use report::{ReportInputs, StatusReport};
pub use signal::{clamp_index, SignalReading};
