//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool listing and dispatch go through the rmcp `ToolRouter`,
//! which is built once at construction from the fixed set of order tools;
//! the set never changes for the lifetime of the process.

use std::sync::Arc;

#[allow(unused_imports)]
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};

use super::config::Config;
use crate::domains::orders::OrderRepository;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp. The order repository is
/// injected at construction and shared with every tool route.
#[derive(Clone)]
pub struct OrdersServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl OrdersServer {
    /// Create a new MCP server with the given configuration and repository.
    pub fn new(config: Config, repo: Arc<dyn OrderRepository>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(repo),
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for OrdersServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Orders management server. Provides tools for querying an order's \
                 status by id and for creating new orders in the database."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
