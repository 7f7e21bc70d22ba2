//! Document error types.

use st_config::ConfigError;
use st_core::validation::NoteInputError;
use st_storage::StorageError;

/// Errors returned by [`StDocument`](crate::StDocument) operations.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The caller passed an argument that can never succeed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("exercise not found: {0}")]
    ExerciseNotFound(i32),

    #[error("sport type not found: {0}")]
    SportTypeNotFound(i32),

    #[error("note not found: {0}")]
    NoteNotFound(i32),

    /// A sport type cannot be removed while exercises reference it.
    #[error("sport type {id} is used by {count} exercise(s)")]
    SportTypeInUse { id: i32, count: usize },

    /// Note input was rejected; nothing was changed.
    #[error(transparent)]
    NoteInput(#[from] NoteInputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience alias used throughout the document crate.
pub type Result<T> = std::result::Result<T, DocumentError>;
