//! Note -- a dated free-text entry in the calendar.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::id_list::IdObject;

/// A free-text note attached to a point in time.
///
/// Notes are replaced wholesale on edit; see
/// [`NoteInput::apply`](crate::validation::NoteInput::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub date_time: NaiveDateTime,
    pub text: String,
}

impl Note {
    pub fn new(id: i32, date_time: NaiveDateTime, text: impl Into<String>) -> Self {
        Self {
            id,
            date_time,
            text: text.into(),
        }
    }

    /// Returns the first line of the text, truncated to `max` characters.
    pub fn summary(&self, max: usize) -> String {
        let first = self.text.lines().next().unwrap_or("");
        if first.chars().count() > max {
            let cut: String = first.chars().take(max.saturating_sub(3)).collect();
            format!("{cut}...")
        } else {
            first.to_string()
        }
    }
}

impl IdObject for Note {
    fn id(&self) -> i32 {
        self.id
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        Some(self.date_time)
    }
}
