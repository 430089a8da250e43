// ABOUTME: Hour-of-day traffic baseline and short-term trend curves in Korea Standard Time
// ABOUTME: Pure functions shared by the synthetic provider and its tests

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};

/// Weekend demand multiplier
pub const WEEKEND_MULTIPLIER: f64 = 1.3;

/// Baseline traffic for an hour of the day, before popularity scaling
#[must_use]
pub const fn baseline_traffic(hour: u32) -> f64 {
    match hour {
        10..=11 => 0.4,
        12..=13 => 0.6,
        14..=17 => 0.7,
        18..=19 => 0.5,
        _ => 0.2,
    }
}

/// Expected short-term change in traffic for an hour of the day
///
/// Late morning builds toward the lunch peak, the afternoon keeps rising
/// slowly and early evening drains.
#[must_use]
pub const fn forecast_trend(hour: u32) -> f64 {
    match hour {
        11..=12 => 0.10,
        14..=16 => 0.05,
        17..=18 => -0.10,
        _ => 0.0,
    }
}

/// Whether `at` falls on a Saturday or Sunday in its own offset
#[must_use]
pub fn is_weekend(at: &DateTime<FixedOffset>) -> bool {
    matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Noise-free traffic index for an area of the given popularity at `at`
#[must_use]
pub fn expected_traffic(base_popularity: f64, at: &DateTime<FixedOffset>) -> f64 {
    let mut traffic = baseline_traffic(at.hour()) * base_popularity;
    if is_weekend(at) {
        traffic = (traffic * WEEKEND_MULTIPLIER).min(1.0);
    }
    traffic
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kst(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_baseline_boundaries() {
        assert!((baseline_traffic(9) - 0.2).abs() < f64::EPSILON);
        assert!((baseline_traffic(10) - 0.4).abs() < f64::EPSILON);
        assert!((baseline_traffic(12) - 0.6).abs() < f64::EPSILON);
        assert!((baseline_traffic(14) - 0.7).abs() < f64::EPSILON);
        assert!((baseline_traffic(17) - 0.7).abs() < f64::EPSILON);
        assert!((baseline_traffic(18) - 0.5).abs() < f64::EPSILON);
        assert!((baseline_traffic(20) - 0.2).abs() < f64::EPSILON);
        assert!((baseline_traffic(3) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_boundaries() {
        assert!((forecast_trend(10)).abs() < f64::EPSILON);
        assert!((forecast_trend(11) - 0.10).abs() < f64::EPSILON);
        assert!((forecast_trend(13)).abs() < f64::EPSILON);
        assert!((forecast_trend(16) - 0.05).abs() < f64::EPSILON);
        assert!((forecast_trend(17) + 0.10).abs() < f64::EPSILON);
        assert!((forecast_trend(19)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekend_detection_uses_local_date() {
        assert!(!is_weekend(&kst("2026-10-16T23:30:00+09:00")));
        assert!(is_weekend(&kst("2026-10-17T00:10:00+09:00")));
        assert!(is_weekend(&kst("2026-10-18T12:00:00+09:00")));
        assert!(!is_weekend(&kst("2026-10-12T12:00:00+09:00")));
    }

    #[test]
    fn test_weekday_and_weekend_expectation() {
        let weekday = expected_traffic(0.85, &kst("2026-10-12T13:00:00+09:00"));
        assert!((weekday - 0.51).abs() < 1e-9);

        let saturday = expected_traffic(0.85, &kst("2026-10-17T15:00:00+09:00"));
        assert!((saturday - 0.7735).abs() < 1e-9);
    }

    #[test]
    fn test_weekend_expectation_stays_in_unit_interval() {
        for hour in 0..24 {
            let at = kst(&format!("2026-10-18T{hour:02}:00:00+09:00"));
            let traffic = expected_traffic(1.0, &at);
            assert!((0.0..=1.0).contains(&traffic), "hour {hour}: {traffic}");
        }
    }
}
