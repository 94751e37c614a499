//! Orders MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! two tools for managing customer orders in a PostgreSQL database:
//! order lookup by id and order creation.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the database connection manager, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **orders**: The order entity, repository trait, and PostgreSQL adapter
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pedidos_mcp_server::core::{Config, ConnectionManager, OrdersServer};
//! use pedidos_mcp_server::domains::orders::PgOrderRepository;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let db = Arc::new(ConnectionManager::new());
//!     db.connect(&config.database).await?;
//!     let repo = Arc::new(PgOrderRepository::new(db, config.database.query_timeout()));
//!     let server = OrdersServer::new(config, repo);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, ConnectionManager, Error, OrdersServer, Result};
