// ABOUTME: Unified error types shared by the scoring engine, providers, and HTTP layer
// ABOUTME: Defines ErrorCode with HTTP status mapping and the AppError/ErrorResponse pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Every failure that can reach a client is expressed as an [`AppError`]
//! carrying a stable [`ErrorCode`]. Layer-specific errors (provider, scoring)
//! convert into it at the crate boundary, and the HTTP layer renders it with
//! the matching status code.

#[cfg(feature = "http-response")]
mod http;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // External Services (5000-5999)
    /// A signal source could not produce a reading
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration was rejected at startup
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::ExternalServiceUnavailable => 503,
            Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ExternalServiceUnavailable => "A signal source is currently unavailable",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Unified error type for the service
#[derive(Debug, Clone, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Signal source unavailable
    #[must_use]
    pub fn external_unavailable(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", source.into(), message.into()),
        )
    }
}

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}
