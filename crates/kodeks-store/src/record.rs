//! Persisted record types.
//!
//! Field values pass through to JSON unmodified; nullable columns are
//! `Option<_>` and serialize as `null`. Dates serialize as ISO-8601
//! (`YYYY-MM-DD`) strings.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One criminal-code article.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    /// Row id.
    pub id: i32,
    /// Statute identifier (unique), e.g. "158" or "158.1".
    pub code: String,
    /// Article title.
    pub title: String,
    /// Full article text.
    pub description: Option<String>,
    /// Offence category.
    pub category: Option<String>,
    /// Punishment text.
    pub punishment: Option<String>,
}

/// One court-practice precedent.
///
/// `article_code` is a free-text reference to [`Article::code`]; it is
/// not a foreign key, and many cases may cite the same code.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourtCase {
    /// Row id.
    pub id: i32,
    /// Cited article code.
    pub article_code: String,
    /// Court case number.
    pub case_number: Option<String>,
    /// Deciding court.
    pub court_name: Option<String>,
    /// Decision date, when known.
    pub decision_date: Option<NaiveDate>,
    /// Decision type (verdict, appeal ruling, ...).
    pub decision_type: Option<String>,
    /// Case summary.
    pub summary: Option<String>,
    /// Verdict text.
    pub verdict: Option<String>,
    /// Link to the published decision.
    pub url: Option<String>,
}

/// One procedural document template.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Document {
    /// Row id.
    pub id: i32,
    /// Template title.
    pub title: String,
    /// Template category, e.g. "Иски".
    pub category: String,
    /// Template code.
    pub code: Option<String>,
    /// Template description.
    pub description: Option<String>,
}
