// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns x-request-id values and creates one span per HTTP request

use axum::body::Body;
use http::{header::HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::{field::Empty, info_span, Span};

/// Header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Layers that assign a UUID v4 request id when the client sent none and
/// copy it onto the response
#[must_use]
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    (
        SetRequestIdLayer::new(header.clone(), MakeRequestUuid),
        PropagateRequestIdLayer::new(header),
    )
}

/// Create a tracing span for an HTTP request
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = Empty,
        duration_ms = Empty,
    )
}
