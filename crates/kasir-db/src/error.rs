//! # Database Error Types
//!
//! Error types for ledger store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)          Business rejection (CoreError)     │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  DbError::QueryFailed / ...          DbError::Rejected                  │
//! │       │                                   │                             │
//! │       └──────────────┬────────────────────┘                             │
//! │                      ▼                                                  │
//! │  ApiError (apps/api) ← STORAGE_FAILURE or the rejection's own code     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kasir_core::CoreError;
use thiserror::Error;

/// Database operation errors.
///
/// Storage faults and business rejections share one type so that a
/// checkout can abort its transaction with `?` from either source.
#[derive(Debug, Error)]
pub enum DbError {
    /// A business rule rejected the operation (unknown product, not enough
    /// stock, invalid cart). Nothing was written.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// Entity not found in database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - A transaction detail referencing a non-existent product
    /// - Deleting a product that recorded transactions reference
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Constraint violations (CHECK, append-only triggers)
    /// - `database is locked` after the busy timeout elapsed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Committing a transaction failed. Nothing from it is visible.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// The business rejection carried by this error, if any.
    pub fn as_rejection(&self) -> Option<&CoreError> {
        match self {
            DbError::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraints by message:
                // "UNIQUE constraint failed: <table>.<column>"
                // "FOREIGN KEY constraint failed"
                if let Some(field) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        field: field.to_string(),
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_passes_through() {
        let err: DbError = CoreError::ProductNotFound(42).into();
        assert_eq!(err.as_rejection(), Some(&CoreError::ProductNotFound(42)));
        assert_eq!(err.to_string(), CoreError::ProductNotFound(42).to_string());
    }

    #[test]
    fn test_pool_errors_map_to_storage_variants() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
        assert!(DbError::from(sqlx::Error::RowNotFound).as_rejection().is_none());
    }
}
