//! Articles query endpoint.
//!
//! One handler, three query modes: exact lookup by `code`, substring
//! search via `search`, or the capped unfiltered listing. The response
//! shape is polymorphic on the mode: a single object (or literal
//! `null`) for exact lookup, an array otherwise.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::non_empty;
use crate::state::AppState;

/// Query parameters for GET /api/articles.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ArticlesQuery {
    /// Substring search across code, title, and description.
    search: String,
    /// Exact article code lookup; takes precedence over `search`.
    code: String,
}

/// Handle GET /api/articles.
pub(crate) async fn get_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArticlesQuery>,
) -> Result<Response, ApiError> {
    let pool = state.db()?;

    if let Some(code) = non_empty(&params.code) {
        // Option<Article> serializes to the object or literal null
        let article = kodeks_store::article_by_code(pool, code).await?;
        return Ok(Json(article).into_response());
    }

    if let Some(term) = non_empty(&params.search) {
        let articles = kodeks_store::search_articles(pool, term).await?;
        return Ok(Json(articles).into_response());
    }

    let articles = kodeks_store::list_articles(pool).await?;
    Ok(Json(articles).into_response())
}
