// ABOUTME: Errors raised when a scoring policy or level band table is rejected
// ABOUTME: Converts into the unified AppError as a configuration failure

use thiserror::Error;
use visit_core::errors::AppError;
use visit_core::models::Level;

/// Reasons a scoring configuration is refused at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A weight is negative or not a finite number
    #[error("{name} weight must be a finite non-negative number, got {value}")]
    InvalidWeight {
        /// Which weight
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Weights do not add up to one
    #[error("weights must sum to 1.0, got {sum}")]
    WeightSum {
        /// Actual sum
        sum: f64,
    },

    /// Traffic is not weighted more heavily than parking pressure
    #[error("traffic weight {traffic} must exceed parking weight {parking}")]
    TrafficNotDominant {
        /// Configured traffic weight
        traffic: f64,
        /// Configured parking weight
        parking: f64,
    },

    /// The first band does not start at the minimum score
    #[error("first band must start at {expected}, starts at {actual}")]
    LowerBound {
        /// Required start
        expected: u8,
        /// Configured start
        actual: u8,
    },

    /// The last band does not end at the maximum score
    #[error("last band must end at {expected}, ends at {actual}")]
    UpperBound {
        /// Required end
        expected: u8,
        /// Configured end
        actual: u8,
    },

    /// Two neighbouring bands leave a gap or overlap
    #[error("band {level} starts at {lower} but the previous band ends at {previous_upper}")]
    NotContiguous {
        /// Band whose lower bound is wrong
        level: Level,
        /// Its lower bound
        lower: u8,
        /// Upper bound of the band before it
        previous_upper: u8,
    },

    /// A band covers no scores
    #[error("band {level} is empty: [{lower}, {upper})")]
    EmptyBand {
        /// Empty band
        level: Level,
        /// Its lower bound
        lower: u8,
        /// Its upper bound
        upper: u8,
    },

    /// Bands are not listed in ascending level order
    #[error("band at position {position} is {found}, expected {expected}")]
    LevelOrder {
        /// Zero-based row index
        position: usize,
        /// Level required at that row
        expected: Level,
        /// Level configured at that row
        found: Level,
    },
}

impl From<ScoringError> for AppError {
    fn from(error: ScoringError) -> Self {
        Self::config(format!("Scoring configuration rejected: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visit_core::errors::ErrorCode;

    #[test]
    fn test_scoring_errors_become_config_errors() {
        let app: AppError = ScoringError::WeightSum { sum: 1.2 }.into();
        assert_eq!(app.code, ErrorCode::ConfigInvalid);
        assert_eq!(app.http_status(), 500);
        assert!(app.message.contains("weights must sum to 1.0, got 1.2"));
    }
}
