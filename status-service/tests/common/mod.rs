#![allow(dead_code)]

use secrecy::Secret;
use service_core::config as core_config;
use status_service::config::{DatabaseConfig, StatusConfig};
use status_service::startup::Application;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port against the given database.
    pub async fn spawn(database: DatabaseConfig) -> Self {
        let config = StatusConfig {
            common: core_config::Config { port: 0 },
            service_name: "status-service-test".to_string(),
            log_level: "debug".to_string(),
            database,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let http_port = app.port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            http_port,
            client,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.http_address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn database_config(host: &str, port: &str) -> DatabaseConfig {
    DatabaseConfig {
        host: host.to_string(),
        port: port.to_string(),
        name: "status".to_string(),
        user: "status".to_string(),
        password: Secret::new("status".to_string()),
        connect_timeout: Duration::from_secs(2),
    }
}

/// A loopback port with nothing listening on it.
pub async fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

/// A loopback listener that drops every connection right after accepting it,
/// like a server rejecting the handshake.
pub async fn rejecting_server() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let _ = socket.shutdown().await;
        }
    });

    port
}

/// Database settings taken from `TEST_DB_*`, for tests run against a live
/// PostgreSQL instance.
pub fn live_database_config() -> DatabaseConfig {
    let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());

    DatabaseConfig {
        host: var("TEST_DB_HOST", "localhost"),
        port: var("TEST_DB_PORT", "5432"),
        name: var("TEST_DB_NAME", "postgres"),
        user: var("TEST_DB_USER", "postgres"),
        password: Secret::new(var("TEST_DB_PASSWORD", "postgres")),
        connect_timeout: Duration::from_secs(5),
    }
}
