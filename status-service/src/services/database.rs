//! Database connectivity probe backing `/db-check`.

use crate::config::DatabaseConfig;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use service_core::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::{debug, instrument, warn};

/// A single connection attempt against the configured database.
///
/// Implementations must not run queries and must release whatever they open
/// before returning.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn check(&self) -> Result<(), AppError>;
}

/// Opens (and immediately closes) one PostgreSQL connection per check.
#[derive(Debug, Clone)]
pub struct PostgresProbe {
    config: DatabaseConfig,
}

impl PostgresProbe {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self) -> Result<PgConnectOptions, AppError> {
        let port: u16 = self.config.port.trim().parse().map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Invalid database port {:?}: {}",
                self.config.port,
                e
            ))
        })?;

        Ok(PgConnectOptions::new()
            .host(&self.config.host)
            .port(port)
            .database(&self.config.name)
            .username(&self.config.user)
            .password(self.config.password.expose_secret()))
    }
}

#[async_trait]
impl DatabaseProbe for PostgresProbe {
    #[instrument(skip(self))]
    async fn check(&self) -> Result<(), AppError> {
        let options = self.connect_options()?;
        let timeout = self.config.connect_timeout;

        let connection = tokio::time::timeout(timeout, PgConnection::connect_with(&options))
            .await
            .map_err(|_| {
                AppError::DatabaseError(anyhow::anyhow!(
                    "Connection attempt timed out after {:?}",
                    timeout
                ))
            })??;

        debug!(
            host = %self.config.host,
            database = %self.config.name,
            "Database connection established"
        );

        if let Err(e) = connection.close().await {
            warn!(error = %e, "Failed to close database connection cleanly");
        }

        Ok(())
    }
}
