// ABOUTME: Raw congestion signal reading with traffic index and parking pressure
// ABOUTME: Enforces the [0, 1] domain by clamping rather than rejecting values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// Clamp a signal index into `[0, 1]`
///
/// Infinities saturate at the nearest bound. `NaN` carries no ordering, so it
/// collapses to `0.0`.
#[must_use]
pub fn clamp_index(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// One instant's congestion signals for an area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalReading {
    /// Normalized vehicular/pedestrian density (0 = quiet, 1 = gridlock)
    pub traffic_index: f64,
    /// Normalized parking scarcity (0 = plenty of spaces, 1 = full)
    pub parking_pressure: f64,
}

impl SignalReading {
    /// Build a reading, clamping both indices into `[0, 1]`
    #[must_use]
    pub fn new(traffic_index: f64, parking_pressure: f64) -> Self {
        Self {
            traffic_index: clamp_index(traffic_index),
            parking_pressure: clamp_index(parking_pressure),
        }
    }

    /// Copy of this reading with both indices clamped into `[0, 1]`
    ///
    /// Readings deserialized from outside the service bypass [`Self::new`],
    /// so consumers call this before doing arithmetic.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.traffic_index, self.parking_pressure)
    }
}
