//! Storage trait -- the public API for application data persistence.
//!
//! Consumers depend on this trait rather than on a concrete implementation so
//! that alternative backends (mocks, other formats) can be substituted.

use st_core::{Exercise, Note, SportType};

use crate::error::Result;

/// A borrowed snapshot of all application data, written as one unit.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationData<'a> {
    pub sport_types: &'a [SportType],
    pub exercises: &'a [Exercise],
    pub notes: &'a [Note],
}

/// Persistence backend for sport types, exercises and notes.
pub trait Storage {
    /// Returns all sport types in stored order.
    fn load_sport_types(&self) -> Result<Vec<SportType>>;

    /// Returns all exercises ordered by date.
    fn load_exercises(&self) -> Result<Vec<Exercise>>;

    /// Returns all notes ordered by date.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Replaces the stored data with `data` atomically.
    ///
    /// Either all three lists are written or, on error, the previously stored
    /// data is left untouched.
    fn store_all(&self, data: &ApplicationData<'_>) -> Result<()>;

    /// Releases the backend.
    fn close(&self) -> Result<()>;
}
