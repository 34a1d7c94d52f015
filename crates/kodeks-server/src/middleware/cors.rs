//! CORS support.
//!
//! The API is consumed cross-origin by a browser frontend, so every
//! response carries `Access-Control-Allow-Origin: *`, and every query
//! endpoint answers `OPTIONS` preflights with the full header set.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use tower_http::set_header::SetResponseHeaderLayer;

/// Methods the API accepts, as advertised to preflights.
const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Request headers the API accepts.
const ALLOWED_HEADERS: &str = "Content-Type";

/// Preflight cache lifetime in seconds (24 hours).
const MAX_AGE: &str = "86400";

/// Create layer that adds `Access-Control-Allow-Origin: *` to all responses.
pub(crate) fn allow_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}

/// Handle `OPTIONS` preflight requests: 200, empty body, CORS headers.
///
/// The origin header itself comes from [`allow_origin_layer`], which
/// wraps every route.
pub(crate) async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (header::ACCESS_CONTROL_MAX_AGE, MAX_AGE),
        ],
    )
}
