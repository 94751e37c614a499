//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! The router serves the stdio transport; each tool creates its own route
//! with the shared order repository injected.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::orders::OrderRepository;

use super::definitions::{CreateOrderTool, OrderStatusTool};

/// Build the tool router with both order tools.
pub fn build_tool_router<S>(repo: Arc<dyn OrderRepository>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(OrderStatusTool::create_route(repo.clone()))
        .with_route(CreateOrderTool::create_route(repo))
}
