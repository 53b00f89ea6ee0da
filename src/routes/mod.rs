//! HTTP route handlers.
//!
//! The only business route is the liveness probe. It carries its own
//! Cache-Control header so upstream caches never answer for the process.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{http::StatusCode, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTHZ, HEALTHZ_PATH, NOT_FOUND_BODY};
use crate::middleware::request_id_layer;

/// Fallback for paths with no registered route.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Creates the Axum router with the liveness route and request tracing.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTHZ_PATH, get(health::healthz))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTHZ),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
