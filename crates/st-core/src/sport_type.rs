//! Sport type -- the category an exercise belongs to.

use serde::{Deserialize, Serialize};

use crate::enums::SpeedMode;
use crate::id_list::IdObject;

/// Helper for `skip_serializing_if` on `bool` fields that default to `true`.
fn is_true(b: &bool) -> bool {
    *b
}

fn default_true() -> bool {
    true
}

/// A sport type such as "Cycling" or "Running".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportType {
    pub id: i32,

    #[serde(default)]
    pub name: String,

    /// Whether velocity is shown as speed or pace for this sport.
    #[serde(default)]
    pub speed_mode: SpeedMode,

    /// Whether exercises of this type record a distance.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub record_distance: bool,

    /// Display color as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SportType {
    /// Creates a sport type with the given id and default settings.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            name: String::new(),
            speed_mode: SpeedMode::default(),
            record_distance: true,
            color: None,
        }
    }

    /// Sets the name, consuming and returning `self`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the speed mode, consuming and returning `self`.
    pub fn with_speed_mode(mut self, speed_mode: SpeedMode) -> Self {
        self.speed_mode = speed_mode;
        self
    }
}

impl IdObject for SportType {
    fn id(&self) -> i32 {
        self.id
    }
}
