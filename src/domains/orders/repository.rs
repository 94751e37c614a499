//! Order repository - the persistence seam for the orders domain.
//!
//! The [`OrderRepository`] trait is the boundary the tool layer depends
//! on; [`PgOrderRepository`] is the PostgreSQL adapter. Each operation
//! wraps one parameterized statement. Creation runs inside an explicit
//! transaction: rollback happens before any failure is surfaced, commit
//! before success is returned - never left pending.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Connection;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::core::db::{ConnectionManager, DbError};

use super::error::OrderError;
use super::model::{INITIAL_STATUS, Order};

/// Persistence operations for orders.
///
/// Implementations must treat "no matching row" as [`OrderError::NotFound`],
/// not as a datastore failure.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch a single order by primary key.
    async fn fetch_by_id(&self, id: i64) -> Result<Order, OrderError>;

    /// Insert a new order with status "pending" and return its id.
    ///
    /// `customer` is expected to be validated (trimmed, non-empty) and
    /// `amount` strictly positive before this is called.
    async fn create(&self, customer: &str, amount: Decimal) -> Result<i64, OrderError>;
}

/// PostgreSQL implementation of [`OrderRepository`].
///
/// Uses the process-wide single connection; the connection manager's mutex
/// serializes all statements. Every call is bounded by the configured
/// query timeout.
pub struct PgOrderRepository {
    db: Arc<ConnectionManager>,
    query_timeout: Duration,
}

impl PgOrderRepository {
    /// Create a new repository over the given connection manager.
    pub fn new(db: Arc<ConnectionManager>, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn fetch_by_id(&self, id: i64) -> Result<Order, OrderError> {
        let mut guard = self.db.acquire().await;
        let conn = guard.as_mut().ok_or(DbError::NotConnected)?;

        let query = sqlx::query_as::<_, Order>(
            "SELECT id, customer, amount, status, created_at \
             FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn);

        let row = timeout(self.query_timeout, query)
            .await
            .map_err(|_| OrderError::database("query timed out"))?
            .map_err(|e| OrderError::database(e.to_string()))?;

        match row {
            Some(order) => {
                info!("Order retrieved: {} - {}", order.id, order.status);
                Ok(order)
            }
            None => {
                warn!("Order not found: {}", id);
                Err(OrderError::NotFound(id))
            }
        }
    }

    async fn create(&self, customer: &str, amount: Decimal) -> Result<i64, OrderError> {
        let mut guard = self.db.acquire().await;
        let conn = guard.as_mut().ok_or(DbError::NotConnected)?;

        let mut tx = timeout(self.query_timeout, conn.begin())
            .await
            .map_err(|_| OrderError::database("query timed out"))?
            .map_err(|e| OrderError::database(e.to_string()))?;

        let insert = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO orders (customer, amount, status) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(customer)
        .bind(amount)
        .bind(INITIAL_STATUS)
        .fetch_one(&mut *tx);

        let inserted = match timeout(self.query_timeout, insert).await {
            Ok(Ok(row)) => Ok(row),
            Ok(Err(e)) => Err(OrderError::database(e.to_string())),
            Err(_) => Err(OrderError::database("query timed out")),
        };

        match inserted {
            Ok((new_id,)) => {
                tx.commit()
                    .await
                    .map_err(|e| OrderError::database(e.to_string()))?;
                info!("Order created: ID {} - {} - ${}", new_id, customer, amount);
                Ok(new_id)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("Rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{MockOrderRepository, RecordedCall};
    use super::*;

    #[tokio::test]
    async fn test_fetch_before_connect_is_not_connected() {
        let db = Arc::new(ConnectionManager::new());
        let repo = PgOrderRepository::new(db, Duration::from_secs(1));

        let result = repo.fetch_by_id(1).await;
        match result {
            Err(OrderError::Db(DbError::NotConnected)) => {}
            other => panic!("expected NotConnected, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_create_before_connect_is_not_connected() {
        let db = Arc::new(ConnectionManager::new());
        let repo = PgOrderRepository::new(db, Duration::from_secs(1));

        let result = repo.create("Ana", Decimal::new(1050, 2)).await;
        assert!(matches!(result, Err(OrderError::Db(DbError::NotConnected))));
    }

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let repo = MockOrderRepository::new();
        let amount = Decimal::new(1050, 2);

        let id = repo.create("Ana", amount).await.unwrap();
        let order = repo.fetch_by_id(id).await.unwrap();

        assert_eq!(order.customer, "Ana");
        assert_eq!(order.amount, amount);
        assert_eq!(order.status, INITIAL_STATUS);
        assert_eq!(
            repo.calls(),
            vec![
                RecordedCall::Create("Ana".to_string(), amount),
                RecordedCall::FetchById(id),
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_failed_create_stores_nothing() {
        let repo = MockOrderRepository::new().fail_create_with("duplicate key");
        let result = repo.create("Ana", Decimal::ONE).await;
        assert!(matches!(result, Err(OrderError::Db(DbError::Database(_)))));
        assert_eq!(repo.row_count(), 0);
    }

    // Integration tests against a live database. Configure DB_* and run
    // with: cargo test -- --ignored
    mod integration {
        use super::*;
        use crate::core::config::Config;

        async fn live_repo() -> PgOrderRepository {
            let config = Config::from_env();
            let db = Arc::new(ConnectionManager::new());
            db.connect(&config.database)
                .await
                .expect("database must be reachable for ignored tests");
            PgOrderRepository::new(db, config.database.query_timeout())
        }

        #[ignore]
        #[tokio::test]
        async fn test_create_then_fetch_round_trip() {
            let repo = live_repo().await;
            let amount: Decimal = "10.50".parse().unwrap();

            let id = repo.create("Ana", amount).await.unwrap();
            let order = repo.fetch_by_id(id).await.unwrap();

            assert_eq!(order.id, id);
            assert_eq!(order.customer, "Ana");
            assert_eq!(order.status, "pending");
            // Decimal-exact: 10.50 must not come back as 10.499999...
            assert_eq!(order.amount, amount);
        }

        #[ignore]
        #[tokio::test]
        async fn test_fetch_missing_is_not_found() {
            let repo = live_repo().await;
            let result = repo.fetch_by_id(999_999_999).await;
            assert!(matches!(result, Err(OrderError::NotFound(999_999_999))));
        }
    }
}
