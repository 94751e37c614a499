//! Order-specific error types.
//!
//! "Not found" is an expected, recoverable outcome here - a value, not a
//! panic. The tool layer maps every variant into the uniform error
//! envelope returned to the caller.

use thiserror::Error;

use crate::core::db::DbError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order exists with the given id.
    #[error("order with id {0} not found")]
    NotFound(i64),

    /// The datastore failed during the operation.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl OrderError {
    /// Create a database error from any displayable source.
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Db(DbError::Database(msg.into()))
    }
}
