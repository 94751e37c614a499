//! Order creation tool.
//!
//! Validates the customer name and amount, then inserts a new order with
//! status "pending" and returns the generated id. Validation failures and
//! database failures come back in the same error envelope shape.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::orders::{OrderCreated, OrderRepository};

use super::common::{error_envelope, success_envelope};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create order tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateOrderParams {
    /// Customer name. Surrounding whitespace is trimmed before validation.
    #[schemars(description = "Nombre del cliente", length(min = 1))]
    pub customer: String,

    /// Order amount. Must be strictly greater than zero.
    #[schemars(description = "Monto del pedido (debe ser mayor a 0)", range(min = 0.01))]
    pub amount: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create order tool - inserts a new pending order.
pub struct CreateOrderTool;

impl CreateOrderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "pedidos_crear";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Crea un nuevo pedido con estado 'pendiente' \
        y retorna su ID. El pedido se crea con los datos del cliente y monto \
        especificados.";

    /// Execute the tool logic.
    ///
    /// Validation runs strictly before any datastore call; an invalid
    /// customer or amount never reaches the repository.
    pub async fn execute(params: &CreateOrderParams, repo: &dyn OrderRepository) -> CallToolResult {
        let customer = params.customer.trim();
        if customer.is_empty() {
            return error_envelope("customer name is required");
        }

        if params.amount <= 0.0 {
            return error_envelope("amount must be greater than 0");
        }

        let amount = match Decimal::try_from(params.amount) {
            Ok(amount) => amount,
            Err(_) => return error_envelope("amount must be a valid number"),
        };

        info!("Create order tool called for customer: {}", customer);

        match repo.create(customer, amount).await {
            Ok(id) => success_envelope(&OrderCreated {
                id,
                message: "Pedido creado exitosamente".to_string(),
            }),
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
        match serde_json::from_value::<CreateOrderParams>(serde_json::Value::Object(arguments)) {
            Ok(params) => Self::execute(&params, repo).await,
            Err(e) => error_envelope(&format!("invalid arguments: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateOrderParams>(),
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
