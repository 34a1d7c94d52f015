//! Parameterized queries for the three reference tables.
//!
//! SQL lives in module constants so ordering and limits stay visible and
//! testable. User input reaches the database only through `$n` binds.

use sqlx::PgPool;

use crate::record::{Article, CourtCase, Document};

/// Row cap for article substring search.
pub const ARTICLE_SEARCH_LIMIT: i64 = 20;
/// Row cap for the unfiltered article listing.
pub const ARTICLE_LIST_LIMIT: i64 = 50;
/// Row cap for court-practice search.
pub const CASE_SEARCH_LIMIT: i64 = 50;

const SELECT_ARTICLE_BY_CODE: &str = "\
    SELECT id, code, title, description, category, punishment \
    FROM articles \
    WHERE code = $1";

const SEARCH_ARTICLES: &str = "\
    SELECT id, code, title, description, category, punishment \
    FROM articles \
    WHERE code ILIKE $1 OR title ILIKE $1 OR description ILIKE $1 \
    ORDER BY code \
    LIMIT $2";

const LIST_ARTICLES: &str = "\
    SELECT id, code, title, description, category, punishment \
    FROM articles \
    ORDER BY code \
    LIMIT $1";

const SEARCH_CASES: &str = "\
    SELECT id, article_code, case_number, court_name, decision_date, \
           decision_type, summary, verdict, url \
    FROM court_practice \
    WHERE article_code ILIKE $1 \
    ORDER BY decision_date DESC \
    LIMIT $2";

const LIST_DOCUMENTS_BY_CATEGORY: &str = "\
    SELECT id, title, category, code, description \
    FROM documents \
    WHERE category = $1 \
    ORDER BY title";

const LIST_DOCUMENTS: &str = "\
    SELECT id, title, category, code, description \
    FROM documents \
    ORDER BY category, title";

/// Wrap a search term for ILIKE substring matching.
///
/// `%` and `_` in the term are not escaped: they pass through as
/// wildcards, matching the behavior of the upstream data service.
fn contains_pattern(term: &str) -> String {
    format!("%{term}%")
}

/// Look up a single article by exact code.
pub async fn article_by_code(pool: &PgPool, code: &str) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(SELECT_ARTICLE_BY_CODE)
        .bind(code)
        .fetch_optional(pool)
        .await
}

/// Case-insensitive substring search across code, title, and description.
///
/// Ordered by code ascending, capped at [`ARTICLE_SEARCH_LIMIT`] rows.
pub async fn search_articles(pool: &PgPool, term: &str) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(SEARCH_ARTICLES)
        .bind(contains_pattern(term))
        .bind(ARTICLE_SEARCH_LIMIT)
        .fetch_all(pool)
        .await
}

/// Unfiltered article listing, ordered by code ascending and capped at
/// [`ARTICLE_LIST_LIMIT`] rows.
pub async fn list_articles(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(LIST_ARTICLES)
        .bind(ARTICLE_LIST_LIMIT)
        .fetch_all(pool)
        .await
}

/// Case-insensitive substring search of precedents by cited article code.
///
/// Most recent decisions first, capped at [`CASE_SEARCH_LIMIT`] rows.
pub async fn cases_by_article(
    pool: &PgPool,
    article_code: &str,
) -> Result<Vec<CourtCase>, sqlx::Error> {
    sqlx::query_as::<_, CourtCase>(SEARCH_CASES)
        .bind(contains_pattern(article_code))
        .bind(CASE_SEARCH_LIMIT)
        .fetch_all(pool)
        .await
}

/// List document templates, optionally filtered to one exact category.
///
/// Filtered results are ordered by title; the full listing is ordered by
/// category then title. No row cap.
pub async fn list_documents(
    pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<Document>, sqlx::Error> {
    match category {
        Some(category) => {
            sqlx::query_as::<_, Document>(LIST_DOCUMENTS_BY_CATEGORY)
                .bind(category)
                .fetch_all(pool)
                .await
        }
        None => {
            sqlx::query_as::<_, Document>(LIST_DOCUMENTS)
                .fetch_all(pool)
                .await
        }
    }
}
