// ABOUTME: Structured error type for signal provider operations
// ABOUTME: Maps provider failures onto the unified AppError as a 503 external service error

use thiserror::Error;
use visit_core::errors::AppError;

/// Failures a signal source can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The upstream source could not be reached or refused the request
    #[error("signal provider {provider} unavailable: {details}")]
    Unavailable {
        /// Provider name
        provider: &'static str,
        /// What went wrong
        details: String,
    },

    /// The source answered with something that is not a usable reading
    #[error("signal provider {provider} returned an invalid reading: {details}")]
    InvalidReading {
        /// Provider name
        provider: &'static str,
        /// What was wrong with it
        details: String,
    },
}

impl ProviderError {
    /// Create an "unavailable" error
    #[must_use]
    pub fn unavailable(provider: &'static str, details: impl Into<String>) -> Self {
        Self::Unavailable {
            provider,
            details: details.into(),
        }
    }

    /// Create an "invalid reading" error
    #[must_use]
    pub fn invalid_reading(provider: &'static str, details: impl Into<String>) -> Self {
        Self::InvalidReading {
            provider,
            details: details.into(),
        }
    }

    /// Name of the provider that failed
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Unavailable { provider, .. } | Self::InvalidReading { provider, .. } => provider,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        Self::external_unavailable(error.provider(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visit_core::errors::ErrorCode;

    #[test]
    fn test_provider_errors_become_service_unavailable() {
        let app: AppError = ProviderError::unavailable("its-feed", "connection refused").into();
        assert_eq!(app.code, ErrorCode::ExternalServiceUnavailable);
        assert_eq!(app.http_status(), 503);
        assert!(app.message.contains("connection refused"));
    }

    #[test]
    fn test_provider_name_is_kept() {
        let err = ProviderError::invalid_reading("parking-feed", "NaN occupancy");
        assert_eq!(err.provider(), "parking-feed");
    }
}
