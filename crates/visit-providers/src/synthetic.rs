// ABOUTME: Rule-based synthetic signal provider driven by hour-of-day curves and seeded jitter
// ABOUTME: Reproducible within each five-minute window so repeated polls agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Synthetic signal provider
//!
//! Stands in for live traffic and parking feeds. Readings follow the
//! baseline curve in [`crate::curve`] scaled by the area's popularity, with
//! uniform jitter layered on top.
//!
//! Jitter is not drawn from a global RNG. Each reading seeds a `ChaCha8Rng`
//! from a SHA-256 digest of the area id, the KST date, the hour, the
//! five-minute bucket and a stream tag. Two requests inside the same bucket
//! therefore see the same numbers, and tests can pin exact values.

use crate::core::SignalProvider;
use crate::curve::{expected_traffic, forecast_trend};
use crate::errors::ProviderError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, Timelike};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;
use visit_core::constants::signals::{DEFAULT_FORECAST_NOISE, DEFAULT_JITTER_AMPLITUDE};
use visit_core::constants::time::{FORECAST_HORIZON_MINUTES, JITTER_BUCKET_MINUTES};
use visit_core::errors::{AppError, AppResult};
use visit_core::models::{clamp_index, Area, SignalReading};
use visit_core::time::kst;

/// Share of the traffic index carried into parking pressure
const PARKING_TRAFFIC_RATIO: f64 = 0.9;
/// Upper bound of the parking surcharge per unit of jitter amplitude
const PARKING_SURGE_PER_JITTER: f64 = 1.5;
/// Upper bound of the forecast parking surcharge per unit of forecast noise
const PARKING_SURGE_PER_NOISE: f64 = 2.0;

const NOW_STREAM: &str = "now";
const FORECAST_STREAM: &str = "forecast-30m";

/// Noise settings for the synthetic provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSignalConfig {
    /// Half-width of the uniform jitter added to the current traffic index
    pub jitter_amplitude: f64,
    /// Half-width of the uniform noise added to the forecast traffic index
    pub forecast_noise: f64,
}

impl SyntheticSignalConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either value is not a finite number
    /// in `[0, 1]`.
    pub fn new(jitter_amplitude: f64, forecast_noise: f64) -> AppResult<Self> {
        for (name, value) in [
            ("jitter_amplitude", jitter_amplitude),
            ("forecast_noise", forecast_noise),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AppError::config(format!(
                    "{name} must be a number in [0, 1], got {value}"
                )));
            }
        }
        Ok(Self {
            jitter_amplitude,
            forecast_noise,
        })
    }

    /// No jitter and no forecast noise: readings equal the baseline curve
    #[must_use]
    pub const fn noiseless() -> Self {
        Self {
            jitter_amplitude: 0.0,
            forecast_noise: 0.0,
        }
    }
}

impl Default for SyntheticSignalConfig {
    fn default() -> Self {
        Self {
            jitter_amplitude: DEFAULT_JITTER_AMPLITUDE,
            forecast_noise: DEFAULT_FORECAST_NOISE,
        }
    }
}

/// Synthetic provider bound to one area
#[derive(Debug, Clone)]
pub struct SyntheticSignalProvider {
    area: &'static Area,
    config: SyntheticSignalConfig,
}

impl SyntheticSignalProvider {
    /// Create a provider for `area`
    #[must_use]
    pub const fn for_area(area: &'static Area, config: SyntheticSignalConfig) -> Self {
        Self { area, config }
    }

    /// Area this provider reports on
    #[must_use]
    pub const fn area(&self) -> &'static Area {
        self.area
    }

    /// Noise settings in use
    #[must_use]
    pub const fn config(&self) -> &SyntheticSignalConfig {
        &self.config
    }

    /// Deterministic RNG for one five-minute window and stream
    fn stream(&self, at: &DateTime<FixedOffset>, tag: &str) -> ChaCha8Rng {
        let bucket = at.minute() / JITTER_BUCKET_MINUTES;
        let mut hasher = Sha256::new();
        hasher.update(self.area.id.as_bytes());
        hasher.update(b"|");
        hasher.update(at.date_naive().to_string().as_bytes());
        hasher.update(at.hour().to_be_bytes());
        hasher.update(bucket.to_be_bytes());
        hasher.update(tag.as_bytes());
        let seed: [u8; 32] = hasher.finalize().into();
        ChaCha8Rng::from_seed(seed)
    }

    /// Current reading, computed synchronously
    #[must_use]
    pub fn reading_at(&self, at: DateTime<FixedOffset>) -> SignalReading {
        let at = at.with_timezone(&kst());
        let mut rng = self.stream(&at, NOW_STREAM);
        let amplitude = self.config.jitter_amplitude;

        let traffic = clamp_index(
            expected_traffic(self.area.base_popularity, &at) + symmetric(&mut rng, amplitude),
        );
        let surcharge = rng.gen::<f64>() * PARKING_SURGE_PER_JITTER * amplitude;
        let parking = clamp_index(traffic.mul_add(PARKING_TRAFFIC_RATIO, surcharge));

        SignalReading::new(traffic, parking)
    }

    /// Reading expected thirty minutes after `at`, computed synchronously
    ///
    /// Independent of [`Self::reading_at`]: the baseline is evaluated at the
    /// target instant, the trend is keyed on the current hour and the noise
    /// comes from its own stream.
    #[must_use]
    pub fn forecast_at(&self, at: DateTime<FixedOffset>) -> SignalReading {
        let at = at.with_timezone(&kst());
        let target = at + Duration::minutes(FORECAST_HORIZON_MINUTES);
        let mut rng = self.stream(&at, FORECAST_STREAM);
        let noise = self.config.forecast_noise;

        let traffic = clamp_index(
            expected_traffic(self.area.base_popularity, &target)
                + forecast_trend(at.hour())
                + symmetric(&mut rng, noise),
        );
        let surcharge = rng.gen::<f64>() * PARKING_SURGE_PER_NOISE * noise;
        let parking = clamp_index(traffic.mul_add(PARKING_TRAFFIC_RATIO, surcharge));

        SignalReading::new(traffic, parking)
    }
}

/// Uniform draw in `[-amplitude, amplitude)`
fn symmetric(rng: &mut ChaCha8Rng, amplitude: f64) -> f64 {
    rng.gen::<f64>().mul_add(2.0, -1.0) * amplitude
}

#[async_trait]
impl SignalProvider for SyntheticSignalProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn current(&self, at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
        let reading = self.reading_at(at);
        debug!(
            area = self.area.id,
            traffic_index = reading.traffic_index,
            parking_pressure = reading.parking_pressure,
            "Synthetic current reading"
        );
        Ok(reading)
    }

    async fn forecast(&self, at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
        let reading = self.forecast_at(at);
        debug!(
            area = self.area.id,
            traffic_index = reading.traffic_index,
            parking_pressure = reading.parking_pressure,
            "Synthetic forecast reading"
        );
        Ok(reading)
    }
}
