// ABOUTME: Scoring engine mapping a signal reading to a 0-100 score and severity level
// ABOUTME: Pure and reentrant; validates its policy and band table once at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Scoring Engine
//!
//! `assess` runs four steps:
//!
//! 1. clamp both indices into `[0, 1]`
//! 2. combine them with the [`ScoringPolicy`] weights
//! 3. scale the composite to `[0, 100]` and round half away from zero
//! 4. classify the score with the [`LevelBands`] table
//!
//! Each step is monotone, so raising either input never lowers the score.

use crate::bands::LevelBands;
use crate::errors::ScoringError;
use crate::messages::MessageCatalog;
use crate::policy::ScoringPolicy;
use visit_core::constants::scoring::SCORE_MAX;
use visit_core::models::{DifficultyAssessment, Horizon, Locale, SignalReading};

/// Turns signal readings into difficulty assessments
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
    bands: LevelBands,
}

impl ScoringEngine {
    /// Build an engine, re-checking the policy and band table
    ///
    /// # Errors
    ///
    /// Returns a [`ScoringError`] if either the weights or the band table
    /// violate their invariants.
    pub fn new(policy: ScoringPolicy, bands: LevelBands) -> Result<Self, ScoringError> {
        let policy = ScoringPolicy::new(policy.traffic_weight(), policy.parking_weight())?;
        let bands = LevelBands::new(*bands.bands())?;
        Ok(Self { policy, bands })
    }

    /// Engine with the default 60/40 weights and the standard band table
    #[must_use]
    pub fn standard() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            bands: LevelBands::standard(),
        }
    }

    /// Weighting policy in use
    #[must_use]
    pub const fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Band table in use
    #[must_use]
    pub const fn bands(&self) -> &LevelBands {
        &self.bands
    }

    /// Score a composite in `[0, 1]` on the 0-100 scale
    #[must_use]
    pub fn score_composite(composite: f64) -> u8 {
        let scaled = (composite * f64::from(SCORE_MAX)).round();
        if scaled.is_finite() {
            scaled.clamp(0.0, f64::from(SCORE_MAX)) as u8
        } else {
            0
        }
    }

    /// Assess one reading
    #[must_use]
    pub fn assess(&self, reading: &SignalReading) -> DifficultyAssessment {
        let composite = self.policy.composite(reading);
        let score = Self::score_composite(composite);
        DifficultyAssessment {
            score,
            level: self.bands.classify(score),
        }
    }

    /// Render the advisory for an assessment
    #[must_use]
    pub fn advise(
        &self,
        assessment: &DifficultyAssessment,
        horizon: Horizon,
        locale: Locale,
        area_name: &str,
    ) -> String {
        MessageCatalog::render(assessment.level, horizon, locale, area_name)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}
