//! Database error types.
//!
//! All fallible operations in this crate return [`DbResult`], which wraps
//! [`DbError`]. sqlx errors are converted at the crate boundary so callers
//! never have to depend on sqlx directly.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to open the database or establish a connection.
    #[error("database connection failed: {0}")]
    ConnectionFailed(String),

    /// A query failed to execute.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// No connection was available within the acquire timeout.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Unexpected internal error.
    #[error("internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors into our domain errors.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => {
                DbError::ConnectionFailed("connection pool is closed".to_string())
            }
            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),
            other => DbError::Internal(other.to_string()),
        }
    }
}

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;

// ===== Tests =====
