//! Read-only storage layer for the kodeks legal reference API.
//!
//! Provides the persisted record types (criminal-code articles,
//! court-practice precedents, procedural document templates) and the
//! parameterized queries that serve the HTTP endpoints. All access goes
//! through a shared [`sqlx::PgPool`]; connections are checked out per
//! query and returned on every exit path.
//!
//! The tables are populated and maintained by a separate ingestion
//! process. This crate never writes.

mod query;
mod record;

pub use query::{
    ARTICLE_LIST_LIMIT, ARTICLE_SEARCH_LIMIT, CASE_SEARCH_LIMIT, article_by_code,
    cases_by_article, list_articles, list_documents, search_articles,
};
pub use record::{Article, CourtCase, Document};
