// ABOUTME: Explicit level band table partitioning the 0-100 score range
// ABOUTME: Checks contiguity and coverage at construction so classification is total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Level bands
//!
//! A score is classified by table lookup rather than by a chain of
//! comparisons. The table is validated once, when it is built: bands must be
//! listed in level order, be non-empty, start at 0, end at 100 and share their
//! boundaries. Every band is `[lower, upper)` except the last, which is
//! `[lower, 100]`.

use crate::errors::ScoringError;
use serde::Serialize;
use visit_core::constants::scoring::{
    HARD_LOWER, MODERATE_LOWER, SCORE_MAX, SCORE_MIN, VERY_HARD_LOWER,
};
use visit_core::models::Level;

/// One row of the band table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelBand {
    /// Level assigned to scores in this band
    pub level: Level,
    /// Inclusive lower bound
    pub lower: u8,
    /// Exclusive upper bound (inclusive for the last band)
    pub upper: u8,
}

impl LevelBand {
    /// Create a band row
    #[must_use]
    pub const fn new(level: Level, lower: u8, upper: u8) -> Self {
        Self {
            level,
            lower,
            upper,
        }
    }
}

/// Validated partition of `[0, 100]` into the four levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelBands {
    bands: [LevelBand; 4],
}

impl LevelBands {
    /// Validate and wrap a band table
    ///
    /// # Errors
    ///
    /// Returns a [`ScoringError`] describing the first violated rule.
    pub fn new(bands: [LevelBand; 4]) -> Result<Self, ScoringError> {
        for (position, (band, expected)) in bands.iter().zip(Level::ALL).enumerate() {
            if band.level != expected {
                return Err(ScoringError::LevelOrder {
                    position,
                    expected,
                    found: band.level,
                });
            }
            if band.lower >= band.upper {
                return Err(ScoringError::EmptyBand {
                    level: band.level,
                    lower: band.lower,
                    upper: band.upper,
                });
            }
        }

        let first = bands[0];
        if first.lower != SCORE_MIN {
            return Err(ScoringError::LowerBound {
                expected: SCORE_MIN,
                actual: first.lower,
            });
        }

        let last = bands[bands.len() - 1];
        if last.upper != SCORE_MAX {
            return Err(ScoringError::UpperBound {
                expected: SCORE_MAX,
                actual: last.upper,
            });
        }

        for pair in bands.windows(2) {
            if pair[1].lower != pair[0].upper {
                return Err(ScoringError::NotContiguous {
                    level: pair[1].level,
                    lower: pair[1].lower,
                    previous_upper: pair[0].upper,
                });
            }
        }

        Ok(Self { bands })
    }

    /// The standard table: `[0,40)` EASY, `[40,60)` MODERATE, `[60,80)` HARD, `[80,100]` `VERY_HARD`
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            bands: [
                LevelBand::new(Level::Easy, SCORE_MIN, MODERATE_LOWER),
                LevelBand::new(Level::Moderate, MODERATE_LOWER, HARD_LOWER),
                LevelBand::new(Level::Hard, HARD_LOWER, VERY_HARD_LOWER),
                LevelBand::new(Level::VeryHard, VERY_HARD_LOWER, SCORE_MAX),
            ],
        }
    }

    /// Rows of the table in ascending order
    #[must_use]
    pub const fn bands(&self) -> &[LevelBand; 4] {
        &self.bands
    }

    /// Classify a score
    ///
    /// Scores above 100 are treated as 100. Because the table is a validated
    /// partition, the last band whose lower bound is not above the score is
    /// the unique band containing it.
    #[must_use]
    pub fn classify(&self, score: u8) -> Level {
        let score = score.min(SCORE_MAX);
        self.bands
            .iter()
            .rev()
            .find(|band| band.lower <= score)
            .map_or(Level::Easy, |band| band.level)
    }
}

impl Default for LevelBands {
    fn default() -> Self {
        Self::standard()
    }
}
