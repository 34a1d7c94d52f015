//! API error types.
//!
//! Every user-visible failure is a plain JSON object with a single
//! `error` string field. Database errors are logged server-side and
//! mapped to a generic message; driver details never reach the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Errors surfaced by the query endpoints.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    /// No database connection string was configured.
    #[error("database connection string is not configured")]
    Configuration,

    /// A required query parameter is absent or empty.
    #[error("missing required parameter {0}")]
    MissingParameter(&'static str),

    /// Request method outside {GET, OPTIONS}.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Query or connection failure in the database layer.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// JSON error envelope.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database configuration error".to_owned(),
            ),
            Self::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                format!("{name} parameter is required"),
            ),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_owned(),
            ),
            Self::Database(err) => {
                tracing::error!(error = %err, "Database query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
