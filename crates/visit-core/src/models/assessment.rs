// ABOUTME: Difficulty assessment pairing a 0-100 score with its severity level
// ABOUTME: Produced deterministically by the scoring engine from one signal reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::level::Level;
use serde::{Deserialize, Serialize};

/// Score and level derived from one [`SignalReading`](super::SignalReading)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyAssessment {
    /// Difficulty score in `[0, 100]`
    pub score: u8,
    /// Severity band the score falls into
    pub level: Level,
}
