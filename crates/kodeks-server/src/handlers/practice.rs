//! Court-practice query endpoint.
//!
//! Searches precedents by cited article code and wraps the results in a
//! `{total, article_code, cases}` envelope.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use kodeks_store::CourtCase;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::non_empty;
use crate::state::AppState;

/// Query parameters for GET /api/court-practice.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PracticeQuery {
    /// Article code to search for (required, substring match).
    article_code: String,
}

/// Response for GET /api/court-practice.
#[derive(Serialize)]
pub(crate) struct PracticeResponse {
    /// Number of cases returned (equals `cases.len()`).
    total: usize,
    /// Echo of the requested article code.
    article_code: String,
    /// Matching precedents, most recent decisions first.
    cases: Vec<CourtCase>,
}

/// Handle GET /api/court-practice.
pub(crate) async fn get_court_practice(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PracticeQuery>,
) -> Result<Json<PracticeResponse>, ApiError> {
    // Parameter validation runs before the configuration check,
    // matching the upstream handler's control flow.
    let Some(article_code) = non_empty(&params.article_code) else {
        return Err(ApiError::MissingParameter("article_code"));
    };

    let pool = state.db()?;
    let cases = kodeks_store::cases_by_article(pool, article_code).await?;

    Ok(Json(PracticeResponse {
        total: cases.len(),
        article_code: article_code.to_owned(),
        cases,
    }))
}
