use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DbStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct DbCheckResponse {
    pub db: DbStatus,
}

/// Attempts one database connection and reports the outcome in the body.
///
/// A failed attempt is logged and reported as `{"db": "error"}` with a
/// 200 status; it never becomes an HTTP error.
pub async fn db_check(State(state): State<AppState>) -> Json<DbCheckResponse> {
    let db = match state.probe.check().await {
        Ok(()) => {
            tracing::debug!("Database check passed");
            DbStatus::Ok
        }
        Err(e) => {
            tracing::error!(error = %e, "Database check failed");
            DbStatus::Error
        }
    };

    Json(DbCheckResponse { db })
}
