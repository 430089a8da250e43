// ABOUTME: Status report aggregating the current and +30 minute assessments for one area
// ABOUTME: Defines the fixed JSON wire shape served by GET /api/status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{Area, DifficultyAssessment, Level, SignalReading};
use crate::constants::signals::REPORT_DECIMALS;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Everything needed to assemble a [`StatusReport`]
#[derive(Debug, Clone)]
pub struct ReportInputs<'a> {
    /// Area the report describes
    pub area: &'a Area,
    /// Instant the report was computed, in KST
    pub now_kst: DateTime<FixedOffset>,
    /// Signals for the current instant
    pub now_reading: SignalReading,
    /// Assessment of `now_reading`
    pub now_assessment: DifficultyAssessment,
    /// Rendered advisory for the current instant
    pub now_message: String,
    /// Signals expected thirty minutes ahead
    pub forecast_reading: SignalReading,
    /// Assessment of `forecast_reading`
    pub forecast_assessment: DifficultyAssessment,
    /// Rendered advisory for the forecast
    pub forecast_message: String,
    /// Disclosure string about the data source
    pub notes: String,
}

/// Point-in-time difficulty report in its JSON wire shape
///
/// Constructed fresh per request and discarded once serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// English area name
    pub area: String,
    /// Korean area name
    pub area_kr: String,
    /// Computation instant with a `+09:00` offset
    pub now_kst: DateTime<FixedOffset>,
    /// Current traffic index
    pub traffic_index_now: f64,
    /// Traffic index expected in thirty minutes
    pub traffic_index_forecast_30m: f64,
    /// Current parking pressure
    pub parking_pressure_now: f64,
    /// Current difficulty score
    pub difficulty_now_0_100: u8,
    /// Difficulty score expected in thirty minutes
    pub difficulty_30m_0_100: u8,
    /// Current level
    pub level_now: Level,
    /// Level expected in thirty minutes
    pub level_30m: Level,
    /// Advisory for the current instant
    pub message: String,
    /// Advisory for the forecast
    pub message_30m: String,
    /// Disclosure that the data is synthetic
    pub notes: String,
}

impl StatusReport {
    /// Assemble the wire report from its parts
    #[must_use]
    pub fn assemble(inputs: ReportInputs<'_>) -> Self {
        Self {
            area: inputs.area.name.to_owned(),
            area_kr: inputs.area.name_kr.to_owned(),
            now_kst: inputs.now_kst,
            traffic_index_now: round_index(inputs.now_reading.traffic_index),
            traffic_index_forecast_30m: round_index(inputs.forecast_reading.traffic_index),
            parking_pressure_now: round_index(inputs.now_reading.parking_pressure),
            difficulty_now_0_100: inputs.now_assessment.score,
            difficulty_30m_0_100: inputs.forecast_assessment.score,
            level_now: inputs.now_assessment.level,
            level_30m: inputs.forecast_assessment.level,
            message: inputs.now_message,
            message_30m: inputs.forecast_message,
            notes: inputs.notes,
        }
    }
}

/// Round an index to the number of decimals the report exposes
#[must_use]
pub fn round_index(value: f64) -> f64 {
    let factor = 10_f64.powi(REPORT_DECIMALS);
    (value * factor).round() / factor
}
