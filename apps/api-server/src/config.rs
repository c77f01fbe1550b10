//! Application configuration loaded from environment variables.

use std::env;

use talos_infra::database::DatabaseConfig;

/// Directory consulted when USER_DIRECTORY_URL is not set.
const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub user_directory_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            user_directory_url: env::var("USER_DIRECTORY_URL")
                .unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string()),
        }
    }
}
