//! Database connection management.
//!
//! The server holds exactly one PostgreSQL connection for its whole
//! lifetime. The [`ConnectionManager`] owns that connection behind a
//! `tokio::sync::Mutex`, which serializes every statement - the single
//! connection is not safe for concurrent use, and this server does not
//! pool or reconnect. A dropped connection surfaces as a per-call
//! [`DbError::Database`] on the next statement.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use super::config::DatabaseConfig;

/// Errors that can occur at the database connection layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not establish the initial connection. Fatal at startup.
    #[error("database connection failed: {0}")]
    Connection(String),

    /// A statement was issued before `connect()` succeeded.
    #[error("database not connected")]
    NotConnected,

    /// The datastore reported a failure during a call.
    #[error("database error: {0}")]
    Database(String),
}

/// Owns the single live database connection.
pub struct ConnectionManager {
    conn: Mutex<Option<PgConnection>>,
}

impl ConnectionManager {
    /// Create a manager with no live connection.
    pub fn new() -> Self {
        Self {
            conn: Mutex::new(None),
        }
    }

    /// Establish the database connection.
    ///
    /// Called once at startup; a failure here is fatal to the process.
    pub async fn connect(&self, config: &DatabaseConfig) -> Result<(), DbError> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user)
            .password(&config.password);

        let conn = options
            .connect()
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        *self.conn.lock().await = Some(conn);
        Ok(())
    }

    /// Close the database connection.
    ///
    /// Idempotent: safe to call twice, or before `connect()` ever ran.
    pub async fn close(&self) {
        if let Some(conn) = self.conn.lock().await.take() {
            if let Err(e) = conn.close().await {
                warn!("Error closing database connection: {}", e);
            } else {
                info!("Database connection closed");
            }
        }
    }

    /// Lock the connection slot for exclusive use.
    ///
    /// The guard holds `None` if `connect()` has not succeeded yet;
    /// callers map that to [`DbError::NotConnected`].
    pub async fn acquire(&self) -> MutexGuard<'_, Option<PgConnection>> {
        self.conn.lock().await
    }

    /// Whether a live connection is currently held.
    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}
