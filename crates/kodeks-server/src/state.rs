//! Application state.
//!
//! Shared state for all request handlers.

use sqlx::PgPool;

use crate::error::ApiError;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Database pool, `None` when no connection string was configured.
    pub(crate) pool: Option<PgPool>,
}

impl AppState {
    /// The database pool, or the configuration error every query
    /// endpoint reports while the connection string is missing.
    pub(crate) fn db(&self) -> Result<&PgPool, ApiError> {
        self.pool.as_ref().ok_or(ApiError::Configuration)
    }
}
