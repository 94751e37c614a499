//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Database connection configuration.
    pub database: DatabaseConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Database connection configuration.
///
/// Sourced from the `DB_*` environment variables. The server holds a single
/// connection for its whole lifetime; there is no pooling.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Database name.
    pub database: String,

    /// Database user.
    pub user: String,

    /// Database password.
    pub password: String,

    /// Upper bound on any single query, in seconds.
    pub query_timeout_secs: u64,
}

impl DatabaseConfig {
    /// The per-query timeout as a [`Duration`].
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

/// Custom Debug implementation to redact the password from logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("query_timeout_secs", &self.query_timeout_secs)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "mcp_lab".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            query_timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pedidos-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            database: DatabaseConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Database settings use the `DB_*` names; server settings use the
    /// `MCP_*` prefix. A `.env` file in the working directory is honored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(host) = std::env::var("DB_HOST") {
            config.database.host = host;
        }

        if let Ok(port) = std::env::var("DB_PORT") {
            if let Ok(port) = port.parse() {
                config.database.port = port;
            }
        }

        if let Ok(database) = std::env::var("DB_NAME") {
            config.database.database = database;
        }

        if let Ok(user) = std::env::var("DB_USER") {
            config.database.user = user;
        }

        if let Ok(password) = std::env::var("DB_PASSWORD") {
            config.database.password = password;
        }

        if let Ok(timeout) = std::env::var("DB_QUERY_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                config.database.query_timeout_secs = timeout;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_database_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("DB_HOST");
            std::env::remove_var("DB_PORT");
            std::env::remove_var("DB_NAME");
        }
        let config = Config::from_env();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.database, "mcp_lab");
        assert_eq!(config.database.query_timeout_secs, 30);
    }

    #[test]
    fn test_database_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DB_HOST", "db.example.com");
            std::env::set_var("DB_PORT", "6543");
            std::env::set_var("DB_NAME", "orders");
        }
        let config = Config::from_env();
        assert_eq!(config.database.host, "db.example.com");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.database, "orders");
        unsafe {
            std::env::remove_var("DB_HOST");
            std::env::remove_var("DB_PORT");
            std::env::remove_var("DB_NAME");
        }
    }

    #[test]
    fn test_invalid_port_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DB_PORT", "not-a-port");
        }
        let config = Config::from_env();
        assert_eq!(config.database.port, 5432);
        unsafe {
            std::env::remove_var("DB_PORT");
        }
    }

    #[test]
    fn test_password_redacted_in_debug() {
        let db = DatabaseConfig {
            password: "super_secret".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", db);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_query_timeout_duration() {
        let db = DatabaseConfig {
            query_timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(db.query_timeout(), Duration::from_secs(5));
    }
}
