//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
///
/// Only the preference store can fail; page behavior itself always
/// resolves to a default.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored preference holds a value this build does not understand
    #[error("Invalid preference value for '{key}': {value}")]
    InvalidPreference { key: String, value: String },

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
