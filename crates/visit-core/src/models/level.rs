// ABOUTME: Ordered severity levels for the difficulty score
// ABOUTME: EASY < MODERATE < HARD < VERY_HARD with their wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete severity classification of a difficulty score
///
/// The derived ordering follows declaration order, so `Level::Easy < Level::VeryHard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    /// Comfortable to visit
    Easy,
    /// Busy but manageable
    Moderate,
    /// Congested
    Hard,
    /// Severely congested
    VeryHard,
}

impl Level {
    /// Every level in ascending order
    pub const ALL: [Self; 4] = [Self::Easy, Self::Moderate, Self::Hard, Self::VeryHard];

    /// Wire name of the level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Moderate => "MODERATE",
            Self::Hard => "HARD",
            Self::VeryHard => "VERY_HARD",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
