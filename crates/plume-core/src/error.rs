//! Error types for plume-core

use thiserror::Error;

/// Configuration errors surfaced before any database work starts
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Migrations directory does not exist
    #[error("[E001] Migrations directory not found: {path}")]
    DirNotFound { path: String },

    /// E002: Directory exists but holds no .sql files
    #[error("[E002] No migration files found in {path}")]
    NoMigrations { path: String },

    /// E003: DATABASE_URL is not set
    #[error("[E003] DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,

    /// E004: File name is not valid UTF-8
    #[error("[E004] Invalid migration file name: {path}")]
    InvalidFileName { path: String },

    /// E005: IO error with file path context
    #[error("[E005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
