//! Router construction.
//!
//! Builds the axum router with all routes and middleware. The
//! cross-cutting behavior the endpoints share lives here once: the
//! CORS origin layer wraps every response, each query route answers
//! `OPTIONS` with the shared preflight handler, and any other method
//! falls through to the JSON 405.

use std::sync::Arc;

use axum::Router;
use axum::routing::{MethodFilter, on};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware::cors;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // on(MethodFilter::GET, ...) instead of get(...): get() also routes
    // HEAD to the handler, but the API contract is 405 for every method
    // outside {GET, OPTIONS}, HEAD included.
    let api_routes = Router::new()
        .route(
            "/api/articles",
            on(MethodFilter::GET, handlers::articles::get_articles).options(cors::preflight),
        )
        .route(
            "/api/court-practice",
            on(MethodFilter::GET, handlers::practice::get_court_practice)
                .options(cors::preflight),
        )
        .route(
            "/api/documents",
            on(MethodFilter::GET, handlers::documents::get_documents).options(cors::preflight),
        )
        .route(
            "/api/health",
            on(MethodFilter::GET, handlers::health::get_health).options(cors::preflight),
        );

    api_routes
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors::allow_origin_layer()),
        )
        .with_state(state)
}

/// JSON 405 for any method outside {GET, OPTIONS} on a known route.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    const QUERY_ENDPOINTS: [&str; 3] = ["/api/articles", "/api/court-practice", "/api/documents"];

    /// Router backed by a state with no connection string configured.
    fn unconfigured_app() -> Router {
        create_router(Arc::new(AppState { pool: None }))
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = unconfigured_app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes().to_vec();
        (parts.status, parts.headers, bytes)
    }

    fn body_json(bytes: &[u8]) -> serde_json::Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_options_preflight_on_all_query_endpoints() {
        for endpoint in QUERY_ENDPOINTS {
            let (status, headers, body) = send(Method::OPTIONS, endpoint).await;

            assert_eq!(status, StatusCode::OK, "endpoint {endpoint}");
            assert!(body.is_empty(), "endpoint {endpoint}");
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
            assert_eq!(
                headers[header::ACCESS_CONTROL_ALLOW_METHODS],
                "GET, OPTIONS"
            );
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
            assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
        }
    }

    #[tokio::test]
    async fn test_post_returns_json_405() {
        for endpoint in QUERY_ENDPOINTS {
            let (status, headers, body) = send(Method::POST, endpoint).await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "endpoint {endpoint}");
            assert_eq!(
                body_json(&body),
                serde_json::json!({"error": "Method not allowed"})
            );
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        }
    }

    #[tokio::test]
    async fn test_other_methods_return_405() {
        // HEAD included: get() would route it to the GET handler
        for method in [Method::HEAD, Method::DELETE, Method::PUT, Method::PATCH] {
            let (status, _, body) = send(method.clone(), "/api/articles").await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {method}");
            assert_eq!(
                body_json(&body),
                serde_json::json!({"error": "Method not allowed"})
            );
        }
    }

    #[tokio::test]
    async fn test_unconfigured_database_returns_500() {
        for uri in [
            "/api/articles",
            "/api/articles?code=158",
            // search=кража
            "/api/articles?search=%D0%BA%D1%80%D0%B0%D0%B6%D0%B0",
            "/api/court-practice?article_code=105",
            "/api/documents",
            // category=Иски
            "/api/documents?category=%D0%98%D1%81%D0%BA%D0%B8",
        ] {
            let (status, headers, body) = send(Method::GET, uri).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "uri {uri}");
            assert_eq!(
                body_json(&body),
                serde_json::json!({"error": "Database configuration error"})
            );
            assert_eq!(headers[header::CONTENT_TYPE], "application/json");
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        }
    }

    #[tokio::test]
    async fn test_court_practice_requires_article_code() {
        // 400 beats the configuration 500: parameter validation runs first
        for uri in ["/api/court-practice", "/api/court-practice?article_code="] {
            let (status, _, body) = send(Method::GET, uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
            assert_eq!(
                body_json(&body),
                serde_json::json!({"error": "article_code parameter is required"})
            );
        }
    }

    #[tokio::test]
    async fn test_health_does_not_need_database() {
        let (status, headers, body) = send(Method::GET, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body_json(&body), serde_json::json!({"status": "ok"}));
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404() {
        let (status, _, _) = send(Method::GET, "/api/unknown").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
