//! Application document for SportsTracker.
//!
//! [`StDocument`] is the in-memory holder of the sport type, exercise and
//! note lists and the application options. Front ends query and mutate the
//! data through it and ask it to load and store everything from the data
//! directory.

pub mod document;
pub mod error;
pub mod filter;

pub use document::{DATABASE_FILE, StDocument};
pub use error::DocumentError;
pub use filter::ExerciseFilter;
