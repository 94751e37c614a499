//! Order status lookup tool.
//!
//! Fetches a single order by id and returns its full details, or an
//! error envelope when the id is unknown or the database call fails.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::orders::OrderRepository;

use super::common::{error_envelope, success_envelope};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the order status tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrderStatusParams {
    /// Identifier of the order to look up.
    #[schemars(description = "ID del pedido a consultar", range(min = 1))]
    pub id: i64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Order status tool - retrieves an order's current state by id.
pub struct OrderStatusTool;

impl OrderStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "pedidos_estado_por_id";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Obtiene el estado de un pedido por su ID. \
        Retorna los detalles completos del pedido incluyendo cliente, monto, estado \
        y fecha de creación.";

    /// Execute the tool logic.
    ///
    /// Validation runs strictly before any datastore call.
    pub async fn execute(params: &OrderStatusParams, repo: &dyn OrderRepository) -> CallToolResult {
        info!("Order status tool called for id: {}", params.id);

        if params.id < 1 {
            return error_envelope("id must be a positive integer");
        }

        match repo.fetch_by_id(params.id).await {
            Ok(order) => success_envelope(&order),
            Err(e) => error_envelope(&e.to_string()),
        }
    }

    /// Decode the raw argument bag and execute.
    ///
    /// A decode failure (missing or mistyped argument) is a caller error,
    /// reported as an error envelope rather than a protocol-level failure.
    pub async fn handle(
        arguments: serde_json::Map<String, serde_json::Value>,
        repo: &dyn OrderRepository,
    ) -> CallToolResult {
        match serde_json::from_value::<OrderStatusParams>(serde_json::Value::Object(arguments)) {
            Ok(params) => Self::execute(&params, repo).await,
            Err(e) => error_envelope(&format!("invalid arguments: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<OrderStatusParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(repo: Arc<dyn OrderRepository>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let repo = repo.clone();
            async move { Ok(Self::handle(args, repo.as_ref()).await) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;
    use crate::domains::orders::{MockOrderRepository, Order};

    fn seeded_repo() -> MockOrderRepository {
        MockOrderRepository::new().with_order(Order {
            id: 42,
            customer: "Ana".to_string(),
            amount: "10.50".parse().unwrap(),
            status: "pending".to_string(),
            created_at: None,
        })
    }

    #[tokio::test]
    async fn test_fetch_existing_order() {
        let repo = seeded_repo();
        let params = OrderStatusParams { id: 42 };

        let result = OrderStatusTool::execute(&params, &repo).await;
        assert!(!result.is_error.unwrap_or(false));

        let json: serde_json::Value =
            serde_json::from_str(result_text(&result).unwrap()).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["customer"], "Ana");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["amount"].as_f64(), Some(10.5));
        assert!(json["createdAt"].is_null());
    }

    #[tokio::test]
    async fn test_not_found_mentions_id() {
        let repo = MockOrderRepository::new();
        let params = OrderStatusParams { id: 999999 };

        let result = OrderStatusTool::execute(&params, &repo).await;
        assert!(result.is_error.unwrap_or(false));

        let json: serde_json::Value =
            serde_json::from_str(result_text(&result).unwrap()).unwrap();
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("999999"));
    }

    #[tokio::test]
    async fn test_non_positive_id_skips_repository() {
        let repo = MockOrderRepository::new();
        let params = OrderStatusParams { id: 0 };

        let result = OrderStatusTool::execute(&params, &repo).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_id_is_error_envelope() {
        let repo = MockOrderRepository::new();
        let args = serde_json::Map::new();

        let result = OrderStatusTool::handle(args, &repo).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(repo.calls().is_empty());

        let json: serde_json::Value =
            serde_json::from_str(result_text(&result).unwrap()).unwrap();
        assert!(json["error"].as_str().unwrap().contains("id"));
    }

    #[test]
    fn test_schema_declares_id_contract() {
        let tool = OrderStatusTool::to_tool();
        let schema = &tool.input_schema;
        let required = schema
            .get("required")
            .and_then(|v| v.as_array())
            .expect("schema must list required fields");
        assert!(required.iter().any(|v| v == "id"));

        let id = schema
            .get("properties")
            .and_then(|v| v.get("id"))
            .expect("schema must describe the id property");
        assert_eq!(id.get("minimum").and_then(|v| v.as_f64()), Some(1.0));
    }
}
