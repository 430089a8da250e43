// ABOUTME: HTTP middleware for request tracing, request ids, and CORS
// ABOUTME: Layers applied to every route of the visit difficulty router

/// CORS configuration
pub mod cors;
/// Request id propagation and request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, request_id_layers, REQUEST_ID_HEADER};
