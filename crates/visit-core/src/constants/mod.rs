// ABOUTME: Service constants organized by domain
// ABOUTME: Time offsets, forecast horizon, scoring defaults, and service identifiers

//! Constants module
//!
//! Groups the fixed numbers of the service by domain so that policy values
//! live in one place instead of being scattered through the algorithms.

/// Service identification
pub mod service_names {
    /// Name reported by the health endpoint and the startup log
    pub const VISIT_DIFFICULTY_SERVER: &str = "visit-difficulty-server";
}

/// Time handling
pub mod time {
    /// Korea Standard Time offset from UTC in seconds (UTC+9)
    pub const KST_OFFSET_SECONDS: i32 = 9 * 3600;
    /// How far ahead the forecast reading looks
    pub const FORECAST_HORIZON_MINUTES: i64 = 30;
    /// Width of the window inside which synthetic jitter stays constant
    pub const JITTER_BUCKET_MINUTES: u32 = 5;
}

/// Area selection
pub mod areas {
    /// Area served when no other area is configured
    pub const DEFAULT_AREA_ID: &str = "jeonju-hanok";
}

/// Scoring policy defaults
pub mod scoring {
    /// Lowest difficulty score
    pub const SCORE_MIN: u8 = 0;
    /// Highest difficulty score
    pub const SCORE_MAX: u8 = 100;
    /// Default weight of the traffic index in the composite
    pub const DEFAULT_TRAFFIC_WEIGHT: f64 = 0.6;
    /// Default weight of parking pressure in the composite
    pub const DEFAULT_PARKING_WEIGHT: f64 = 0.4;
    /// Tolerance when checking that weights sum to one
    pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
    /// Lower bound of the MODERATE band
    pub const MODERATE_LOWER: u8 = 40;
    /// Lower bound of the HARD band
    pub const HARD_LOWER: u8 = 60;
    /// Lower bound of the `VERY_HARD` band
    pub const VERY_HARD_LOWER: u8 = 80;
}

/// Synthetic signal defaults
pub mod signals {
    /// Default half-width of the uniform jitter added to the traffic baseline
    pub const DEFAULT_JITTER_AMPLITUDE: f64 = 0.1;
    /// Default half-width of the noise added to the forecast
    pub const DEFAULT_FORECAST_NOISE: f64 = 0.05;
    /// Decimal places kept for indices in the status report
    pub const REPORT_DECIMALS: i32 = 3;
}
