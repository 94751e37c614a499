//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod create_order;
pub mod order_status;

pub use create_order::{CreateOrderParams, CreateOrderTool};
pub use order_status::{OrderStatusParams, OrderStatusTool};
