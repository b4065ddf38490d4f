pub mod db_check;
pub mod health;
pub mod time;

pub use db_check::db_check;
pub use health::health_check;
pub use time::current_time;

use axum::http::Uri;
use service_core::error::AppError;

/// Fallback for any path outside the three status routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("{}", uri.path()))
}
