//! Core types for SportsTracker.
//!
//! This crate contains the domain model (sport types, exercises, notes), the
//! id-keyed list container shared by all of them, note input validation and
//! unit-aware value formatting.

pub mod enums;
pub mod exercise;
pub mod format;
pub mod id_list;
pub mod note;
pub mod sport_type;
pub mod validation;

pub use enums::{Intensity, SpeedMode, UnitSystem};
pub use exercise::Exercise;
pub use id_list::{IdObject, IdObjectList};
pub use note::Note;
pub use sport_type::SportType;
