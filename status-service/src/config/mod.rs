use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Process-wide configuration, read once at startup and shared read-only
/// with every handler.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub database: DatabaseConfig,
}

/// Connection parameters for the database probed by `/db-check`.
///
/// `port` is kept as text: a malformed value only fails the connection
/// attempt, not startup.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub name: String,
    pub user: String,
    pub password: Secret<String>,
    pub connect_timeout: Duration,
}

impl StatusConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let connect_timeout_secs: u64 = get_env("DB_CONNECT_TIMEOUT_SECS", Some("5"))?
            .parse()
            .map_err(|e: std::num::ParseIntError| {
                AppError::ConfigError(anyhow::anyhow!(
                    "DB_CONNECT_TIMEOUT_SECS is not a valid number: {}",
                    e
                ))
            })?;

        let config = StatusConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", Some("status-service"))?,
            log_level: get_env("LOG_LEVEL", Some("info"))?,
            database: DatabaseConfig {
                host: get_env("DB_HOST", None)?,
                port: get_env("DB_PORT", None)?,
                name: get_env("DB_NAME", None)?,
                user: get_env("DB_USER", None)?,
                password: Secret::new(get_env("DB_PASSWORD", None)?),
                connect_timeout: Duration::from_secs(connect_timeout_secs),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.database.connect_timeout.is_zero() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "DB_CONNECT_TIMEOUT_SECS must be greater than 0"
            )));
        }

        Ok(())
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(format!(
                "{} is required but not set",
                key
            )))),
        },
    }
}
