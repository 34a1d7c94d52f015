//! Documents query endpoint.
//!
//! Lists procedural document templates, optionally filtered to one
//! exact category. Always a flat JSON array, never capped.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use kodeks_store::Document;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::non_empty;
use crate::state::AppState;

/// Query parameters for GET /api/documents.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DocumentsQuery {
    /// Exact category filter; empty means "all categories".
    category: String,
}

/// Handle GET /api/documents.
pub(crate) async fn get_documents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DocumentsQuery>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let pool = state.db()?;
    let documents = kodeks_store::list_documents(pool, non_empty(&params.category)).await?;
    Ok(Json(documents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_array_serialization() {
        let documents = vec![Document {
            id: 1,
            title: "Ходатайство".to_owned(),
            category: "Ходатайства".to_owned(),
            code: None,
            description: None,
        }];

        let json = serde_json::to_value(&documents).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["title"], "Ходатайство");
        assert_eq!(json[0]["category"], "Ходатайства");
    }

    #[test]
    fn test_query_defaults_to_empty_category() {
        let params: DocumentsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(params.category, "");
    }
}
