//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the database connection manager,
//! server lifecycle management, and the transport layer.

pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, DatabaseConfig};
pub use db::{ConnectionManager, DbError};
pub use error::{Error, Result};
pub use server::OrdersServer;
