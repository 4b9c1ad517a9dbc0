//! Structured error types for overseer-db.
//!
//! Uses `thiserror` so consumers get composable errors. Only connection
//! setup and pool acquisition surface errors at all; the fire-and-forget
//! helpers in [`crate::db`] log and swallow theirs.

use thiserror::Error;

/// Main error type for overseer-db operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Pool setup, acquisition, or query execution failed
    #[error("database error: {source}")]
    Sqlx {
        #[from]
        source: sqlx::Error,
    },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for overseer-db operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DbError::config("missing database name");
        assert_eq!(
            err.to_string(),
            "configuration error: missing database name"
        );
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::Sqlx { .. }));
    }
}
