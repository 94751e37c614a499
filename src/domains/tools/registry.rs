//! Tool Registry - central registration and dispatch for the order tools.
//!
//! The registry is the last line of defense for a tool call: a known name
//! delegates to the tool's handler, whose validation and datastore
//! failures come back as `{ "error": ... }` envelopes; only an unknown
//! name surfaces as a typed [`ToolError`] to the caller. Nothing panics
//! across this boundary.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use crate::domains::orders::OrderRepository;

use super::definitions::{CreateOrderTool, OrderStatusTool};
use super::error::ToolError;

/// Tool registry - manages the fixed set of order tools.
pub struct ToolRegistry {
    repo: Arc<dyn OrderRepository>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given repository.
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Get all tool names, in listing order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![OrderStatusTool::NAME, CreateOrderTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised tool set.
    /// The sequence is fixed for the process lifetime.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![OrderStatusTool::to_tool(), CreateOrderTool::to_tool()]
    }

    /// Dispatch a tool call to the matching handler.
    ///
    /// Unknown names yield [`ToolError::Unknown`], never a crash.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            OrderStatusTool::NAME => {
                Ok(OrderStatusTool::handle(arguments, self.repo.as_ref()).await)
            }
            CreateOrderTool::NAME => {
                Ok(CreateOrderTool::handle(arguments, self.repo.as_ref()).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown(name))
            }
        }
    }
}
