// ABOUTME: Status report service combining signal provider readings with the scoring engine
// ABOUTME: Reads the clock once per request and builds the current and +30 minute assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::logging::AppLogger;
use std::sync::Arc;
use visit_core::errors::{AppError, AppResult};
use visit_core::models::{
    Area, DifficultyAssessment, Horizon, Locale, ReportInputs, SignalReading, StatusReport,
};
use visit_core::time::{kst, Clock};
use visit_intelligence::{synthetic_data_notice, ScoringEngine};
use visit_providers::{ProviderError, SignalProvider};

/// Assembles [`StatusReport`]s for one area
///
/// Holds no mutable state; every call recomputes from the clock.
pub struct StatusService {
    provider: Arc<dyn SignalProvider>,
    engine: ScoringEngine,
    area: &'static Area,
    locale: Locale,
    clock: Arc<dyn Clock>,
}

impl StatusService {
    /// Create a service
    #[must_use]
    pub fn new(
        provider: Arc<dyn SignalProvider>,
        engine: ScoringEngine,
        area: &'static Area,
        locale: Locale,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            engine,
            area,
            locale,
            clock,
        }
    }

    /// Area name in the configured locale
    fn display_name(&self) -> &'static str {
        match self.locale {
            Locale::Ko => self.area.name_kr,
            Locale::En => self.area.name,
        }
    }

    /// Build a report for the current instant
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceUnavailable` error if either provider call
    /// fails. Nothing partial is returned.
    pub async fn build_report(&self) -> AppResult<StatusReport> {
        let now_kst = self.clock.now().with_timezone(&kst());

        let now_reading = self
            .provider
            .current(now_kst)
            .await
            .map_err(|e| self.provider_failure(Horizon::Now, e))?;
        let forecast_reading = self
            .provider
            .forecast(now_kst)
            .await
            .map_err(|e| self.provider_failure(Horizon::Forecast30m, e))?;

        let (now_assessment, now_message) = self.assess(Horizon::Now, &now_reading);
        let (forecast_assessment, forecast_message) =
            self.assess(Horizon::Forecast30m, &forecast_reading);

        Ok(StatusReport::assemble(ReportInputs {
            area: self.area,
            now_kst,
            now_reading,
            now_assessment,
            now_message,
            forecast_reading,
            forecast_assessment,
            forecast_message,
            notes: synthetic_data_notice(self.locale).to_owned(),
        }))
    }

    fn assess(
        &self,
        horizon: Horizon,
        reading: &SignalReading,
    ) -> (DifficultyAssessment, String) {
        let assessment = self.engine.assess(reading);
        AppLogger::log_assessment(self.area.id, horizon, &assessment);
        let message = self
            .engine
            .advise(&assessment, horizon, self.locale, self.display_name());
        (assessment, message)
    }

    fn provider_failure(&self, horizon: Horizon, error: ProviderError) -> AppError {
        AppLogger::log_provider_failure(
            self.area.id,
            self.provider.name(),
            horizon,
            &error.to_string(),
        );
        error.into()
    }
}
