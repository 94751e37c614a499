//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the stdio transport
//! - `registry.rs` - Central tool registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! The tool set is fixed: two tools over the orders domain, registered
//! once at server construction.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
