//! Orders domain module.
//!
//! This module owns the order entity and its persistence:
//!
//! - `model.rs` - the `Order` entity and creation receipt
//! - `repository.rs` - the `OrderRepository` trait and PostgreSQL adapter
//! - `error.rs` - order-specific error types
//!
//! Orders live in a single pre-existing `orders` table; this module does
//! not manage schema or migrations.

mod error;
mod model;
mod repository;

pub use error::OrderError;
pub use model::{Order, OrderCreated};
pub use repository::{OrderRepository, PgOrderRepository};

#[cfg(test)]
pub use repository::mock::{MockOrderRepository, RecordedCall};
