//! Storage backend for SportsTracker.
//!
//! Provides the [`Storage`] trait and a SQLite implementation ([`SqliteStore`]).

pub mod error;
pub mod sqlite;
pub mod traits;

// Re-exports for convenience.
pub use error::StorageError;
pub use sqlite::SqliteStore;
pub use traits::{ApplicationData, Storage};

// ---------------------------------------------------------------------------
// Storage trait implementation for SqliteStore
// ---------------------------------------------------------------------------

use st_core::{Exercise, Note, SportType};

use crate::error::Result;

impl Storage for SqliteStore {
    fn load_sport_types(&self) -> Result<Vec<SportType>> {
        self.load_sport_types_impl()
    }

    fn load_exercises(&self) -> Result<Vec<Exercise>> {
        self.load_exercises_impl()
    }

    fn load_notes(&self) -> Result<Vec<Note>> {
        self.load_notes_impl()
    }

    fn store_all(&self, data: &ApplicationData<'_>) -> Result<()> {
        self.store_all_impl(data)
    }

    fn close(&self) -> Result<()> {
        // SQLite connections are closed when the Connection is dropped.
        Ok(())
    }
}
