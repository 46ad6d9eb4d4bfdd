//! Error types for plume-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Invalid credentials at connect time (P001)
    #[error("[P001] Invalid database password")]
    InvalidPassword,

    /// Target database missing at connect time (P002)
    #[error("[P002] Database does not exist")]
    UnknownDatabase,

    /// Any other connection failure (P003)
    #[error("[P003] Database connection failed: {0}")]
    Connection(String),

    /// Ledger statement failed outside a migration's transaction (P004)
    #[error("[P004] Ledger operation failed: {0}")]
    Query(String),

    /// A migration's transaction failed and was rolled back (P005)
    #[error("[P005] Migration {filename} failed: {message}")]
    MigrationFailed { filename: String, message: String },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
