//! SQLite-backed storage implementation.

mod exercises;
mod notes;
pub mod schema;
mod sport_types;
mod store;

pub use store::SqliteStore;
