// ABOUTME: Axum IntoResponse integration for AppError
// ABOUTME: Renders errors as JSON bodies with the status code mapped from ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::error;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        error!(code = ?self.code, message = %self.message, "Request failed");

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
