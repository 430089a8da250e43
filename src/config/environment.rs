// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, area, locale, scoring weights, and signal noise from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration
//!
//! Every variable has a default. A variable that is set but does not parse is
//! an error rather than a silent fallback, so a typo in a deployment fails at
//! startup instead of serving numbers from the wrong policy.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;
use visit_core::constants::areas::DEFAULT_AREA_ID;
use visit_core::constants::scoring::{DEFAULT_PARKING_WEIGHT, DEFAULT_TRAFFIC_WEIGHT};
use visit_core::constants::signals::{DEFAULT_FORECAST_NOISE, DEFAULT_JITTER_AMPLITUDE};
use visit_core::errors::AppError;
use visit_core::models::{find_area, Area, Locale};
use visit_intelligence::ScoringPolicy;
use visit_providers::SyntheticSignalConfig;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Which area is served and in which language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitConfig {
    /// Area id served on `/api/status`
    pub area_id: String,
    /// Locale of rendered messages
    pub locale: Locale,
}

/// Composite weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the traffic index
    pub traffic_weight: f64,
    /// Weight of parking pressure
    pub parking_weight: f64,
}

/// Synthetic signal noise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Jitter half-width for current readings
    pub jitter_amplitude: f64,
    /// Noise half-width for forecasts
    pub forecast_noise: f64,
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Served area and locale
    pub visit: VisitConfig,
    /// Scoring weights
    pub scoring: ScoringConfig,
    /// Synthetic signal noise
    pub signals: SignalConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            visit: VisitConfig {
                area_id: DEFAULT_AREA_ID.to_owned(),
                locale: Locale::Ko,
            },
            scoring: ScoringConfig {
                traffic_weight: DEFAULT_TRAFFIC_WEIGHT,
                parking_weight: DEFAULT_PARKING_WEIGHT,
            },
            signals: SignalConfig {
                jitter_amplitude: DEFAULT_JITTER_AMPLITUDE,
                forecast_noise: DEFAULT_FORECAST_NOISE,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or the
    /// resulting configuration fails [`Self::validate`].
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            http_port: parse_var(&lookup, "HTTP_PORT", defaults.http_port)?,
            environment: lookup("ENVIRONMENT")
                .map_or(defaults.environment, |value| {
                    Environment::from_str_or_default(&value)
                }),
            visit: VisitConfig {
                area_id: lookup("VISIT_AREA_ID").unwrap_or(defaults.visit.area_id),
                locale: parse_var(&lookup, "VISIT_LOCALE", defaults.visit.locale)?,
            },
            scoring: ScoringConfig {
                traffic_weight: parse_var(
                    &lookup,
                    "VISIT_TRAFFIC_WEIGHT",
                    defaults.scoring.traffic_weight,
                )?,
                parking_weight: parse_var(
                    &lookup,
                    "VISIT_PARKING_WEIGHT",
                    defaults.scoring.parking_weight,
                )?,
            },
            signals: SignalConfig {
                jitter_amplitude: parse_var(
                    &lookup,
                    "VISIT_SIGNAL_JITTER",
                    defaults.signals.jitter_amplitude,
                )?,
                forecast_noise: parse_var(
                    &lookup,
                    "VISIT_FORECAST_NOISE",
                    defaults.signals.forecast_noise,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .unwrap_or(defaults.cors.allowed_origins),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the overridden configuration is invalid.
    pub fn with_overrides(
        mut self,
        http_port: Option<u16>,
        area_id: Option<String>,
    ) -> Result<Self> {
        if let Some(port) = http_port {
            self.http_port = port;
        }
        if let Some(area_id) = area_id {
            self.visit.area_id = area_id;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown area id, an invalid weight pair or
    /// out-of-range signal noise.
    pub fn validate(&self) -> Result<()> {
        self.area()?;
        self.scoring_policy()?;
        self.signal_config()?;
        Ok(())
    }

    /// Area selected by `visit.area_id`
    ///
    /// # Errors
    ///
    /// Returns an error if no area has that id.
    pub fn area(&self) -> Result<&'static Area> {
        find_area(&self.visit.area_id)
            .ok_or_else(|| anyhow!("Unknown VISIT_AREA_ID: {}", self.visit.area_id))
    }

    /// Validated scoring policy
    ///
    /// # Errors
    ///
    /// Returns an error if the weights are rejected.
    pub fn scoring_policy(&self) -> Result<ScoringPolicy> {
        Ok(
            ScoringPolicy::new(self.scoring.traffic_weight, self.scoring.parking_weight)
                .map_err(AppError::from)?,
        )
    }

    /// Validated synthetic signal settings
    ///
    /// # Errors
    ///
    /// Returns an error if either noise value is out of range.
    pub fn signal_config(&self) -> Result<SyntheticSignalConfig> {
        Ok(SyntheticSignalConfig::new(
            self.signals.jitter_amplitude,
            self.signals.forecast_noise,
        )?)
    }

    /// `host:port` string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Visit Difficulty Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Area: {}\n\
             - Locale: {}\n\
             - Weights: traffic {} / parking {}\n\
             - Signal jitter: {} (forecast noise {})\n\
             - CORS origins: {}",
            self.bind_address(),
            self.environment,
            self.visit.area_id,
            self.visit.locale,
            self.scoring.traffic_weight,
            self.scoring.parking_weight,
            self.signals.jitter_amplitude,
            self.signals.forecast_noise,
            self.cors.allowed_origins,
        )
    }
}

/// Parse an optional variable, keeping `default` when it is unset
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
    })
}
