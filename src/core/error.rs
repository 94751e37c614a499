//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains, providing consistent error handling across the entire
//! application.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the orders domain.
    #[error("Order error: {0}")]
    Order(#[from] crate::domains::orders::OrderError),

    /// Error originating from the database connection layer.
    #[error("Database error: {0}")]
    Db(#[from] super::db::DbError),
}
