//! Order entity and related value types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer order as stored in the `orders` table.
///
/// `amount` is a decimal so currency values round-trip without binary-float
/// rounding; it only becomes a plain number at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    /// Primary key, assigned by the database on insert.
    pub id: i64,

    /// Customer name. Never empty for rows this server inserts.
    pub customer: String,

    /// Order amount. Strictly positive for rows this server inserts.
    pub amount: Decimal,

    /// Lifecycle status. Always "pending" at creation.
    pub status: String,

    /// Database-assigned creation timestamp, if set.
    #[serde(rename = "createdAt")]
    pub created_at: Option<NaiveDateTime>,
}

/// Receipt returned by the create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    /// Identifier of the newly created order.
    pub id: i64,

    /// Human-readable confirmation message.
    pub message: String,
}

/// Initial status for every order created through this server.
pub const INITIAL_STATUS: &str = "pending";
