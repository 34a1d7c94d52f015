//! Health probe endpoint.

use axum::Json;
use serde::Serialize;

/// Response for GET /api/health.
#[derive(Serialize)]
pub(crate) struct HealthResponse {
    /// Always "ok" while the process serves requests.
    status: &'static str,
}

/// Handle GET /api/health. Does not touch the database.
pub(crate) async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_response() {
        let Json(response) = get_health().await;
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}
