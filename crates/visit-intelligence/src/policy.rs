// ABOUTME: Weighting policy combining traffic index and parking pressure into one composite
// ABOUTME: Validates weights so the composite stays in [0, 1] and monotone in both inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::ScoringError;
use serde::Serialize;
use visit_core::constants::scoring::{
    DEFAULT_PARKING_WEIGHT, DEFAULT_TRAFFIC_WEIGHT, WEIGHT_SUM_TOLERANCE,
};
use visit_core::models::SignalReading;

/// Relative weight of each signal in the composite
///
/// Traffic is weighted more heavily than parking by default. The values are a
/// tunable policy, not derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringPolicy {
    traffic_weight: f64,
    parking_weight: f64,
}

impl ScoringPolicy {
    /// Build a validated policy
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidWeight`] for a negative or non-finite
    /// weight, [`ScoringError::WeightSum`] if the weights do not sum to one and
    /// [`ScoringError::TrafficNotDominant`] unless traffic outweighs parking.
    pub fn new(traffic_weight: f64, parking_weight: f64) -> Result<Self, ScoringError> {
        for (name, value) in [("traffic", traffic_weight), ("parking", parking_weight)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidWeight { name, value });
            }
        }

        let sum = traffic_weight + parking_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::WeightSum { sum });
        }

        if traffic_weight <= parking_weight {
            return Err(ScoringError::TrafficNotDominant {
                traffic: traffic_weight,
                parking: parking_weight,
            });
        }

        Ok(Self {
            traffic_weight,
            parking_weight,
        })
    }

    /// Weight applied to the traffic index
    #[must_use]
    pub const fn traffic_weight(&self) -> f64 {
        self.traffic_weight
    }

    /// Weight applied to parking pressure
    #[must_use]
    pub const fn parking_weight(&self) -> f64 {
        self.parking_weight
    }

    /// Weighted composite of a reading, in `[0, 1]`
    ///
    /// The reading is clamped first, so out-of-domain inputs are absorbed here.
    #[must_use]
    pub fn composite(&self, reading: &SignalReading) -> f64 {
        let reading = reading.clamped();
        let combined = reading.traffic_index.mul_add(
            self.traffic_weight,
            reading.parking_pressure * self.parking_weight,
        );
        combined.clamp(0.0, 1.0)
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            traffic_weight: DEFAULT_TRAFFIC_WEIGHT,
            parking_weight: DEFAULT_PARKING_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sixty_forty() {
        let policy = ScoringPolicy::default();
        assert!((policy.traffic_weight() - 0.6).abs() < f64::EPSILON);
        assert!((policy.parking_weight() - 0.4).abs() < f64::EPSILON);
        assert!(ScoringPolicy::new(0.6, 0.4).is_ok());
    }

    #[test]
    fn test_composite_of_reference_reading() {
        let composite = ScoringPolicy::default().composite(&SignalReading::new(0.65, 0.58));
        assert!((composite - 0.622).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = ScoringPolicy::new(1.2, -0.2).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidWeight {
                name: "parking",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        assert!(matches!(
            ScoringPolicy::new(f64::NAN, 0.4),
            Err(ScoringError::InvalidWeight {
                name: "traffic",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        assert!(matches!(
            ScoringPolicy::new(0.6, 0.6),
            Err(ScoringError::WeightSum { .. })
        ));
    }

    #[test]
    fn test_rejects_parking_heavy_or_equal_weights() {
        assert_eq!(
            ScoringPolicy::new(0.2, 0.8).unwrap_err(),
            ScoringError::TrafficNotDominant {
                traffic: 0.2,
                parking: 0.8,
            }
        );
        assert!(matches!(
            ScoringPolicy::new(0.5, 0.5),
            Err(ScoringError::TrafficNotDominant { .. })
        ));
        assert!(ScoringPolicy::new(0.7, 0.3).is_ok());
    }

    #[test]
    fn test_composite_clamps_raw_reading() {
        let raw = SignalReading {
            traffic_index: 4.0,
            parking_pressure: -3.0,
        };
        let composite = ScoringPolicy::default().composite(&raw);
        assert!((composite - 0.6).abs() < 1e-12);
    }
}
