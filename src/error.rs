//! Error types for jndb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using JndbError
pub type Result<T> = std::result::Result<T, JndbError>;

/// Unified error type for jndb operations
#[derive(Debug, Error)]
pub enum JndbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Document Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Table Errors
    // -------------------------------------------------------------------------
    #[error("No table selected, select one with `use_table` or `switch` first")]
    NoTableSelected,

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("A non-empty table name is required")]
    MissingTableName,
}
