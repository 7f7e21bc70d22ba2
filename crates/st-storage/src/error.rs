//! Storage error types.

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to establish or maintain a database connection.
    #[error("connection error: {0}")]
    Connection(String),

    /// A schema migration failed.
    #[error("migration {name} failed: {reason}")]
    Migration {
        /// Name of the migration that failed.
        name: String,
        /// Underlying error description.
        reason: String,
    },

    /// A stored value could not be converted back into a domain value.
    #[error("corrupt {entity} {id}: {reason}")]
    Corrupt {
        /// The kind of entity (e.g., "exercise", "note").
        entity: String,
        /// The id of the offending row.
        id: i32,
        /// What could not be decoded.
        reason: String,
    },

    /// A raw SQLite query error.
    #[error("query error: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Convenience alias used throughout the storage crate.
pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Creates a [`StorageError::Corrupt`] for the given entity row.
    pub fn corrupt(entity: impl Into<String>, id: i32, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            entity: entity.into(),
            id,
            reason: reason.into(),
        }
    }
}
