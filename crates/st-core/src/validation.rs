//! Note input validation.
//!
//! [`NoteInput`] holds the raw values a user enters when adding or editing a
//! note (date, hour, minute, text). [`NoteInput::apply`] checks them in
//! entry order and builds a fresh [`Note`]; the note being edited is never
//! touched, so a rejected input leaves it unchanged.

use chrono::{Local, NaiveDate, NaiveTime};

use crate::note::Note;

/// Default hour for a new note.
pub const DEFAULT_HOUR: u32 = 12;

/// Resource keys for the note editor.
pub mod note_keys {
    pub const TITLE: &str = "st.dlg.note.title";
    pub const TITLE_ADD: &str = "st.dlg.note.title.add";
    pub const ERROR_DATE: &str = "st.dlg.note.error.date";
    pub const ERROR_TIME: &str = "st.dlg.note.error.time";
    pub const ERROR_NO_TEXT: &str = "st.dlg.note.error.no_text";
}

/// The input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Date,
    Time,
    Text,
}

/// Error type for note input failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteInputError {
    #[error("a valid date is required")]
    MissingDate,

    #[error("invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("note text must not be empty")]
    EmptyText,
}

impl NoteInputError {
    /// The field that needs to be corrected.
    pub fn field(&self) -> NoteField {
        match self {
            Self::MissingDate => NoteField::Date,
            Self::InvalidTime { .. } => NoteField::Time,
            Self::EmptyText => NoteField::Text,
        }
    }

    /// Resource key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::MissingDate => note_keys::ERROR_DATE,
            Self::InvalidTime { .. } => note_keys::ERROR_TIME,
            Self::EmptyText => note_keys::ERROR_NO_TEXT,
        }
    }
}

/// Editable values of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    /// `None` when no date was entered or it could not be parsed.
    pub date: Option<NaiveDate>,
    pub hour: u32,
    pub minute: u32,
    pub text: String,
}

impl Default for NoteInput {
    /// Today at 12:00 with empty text.
    fn default() -> Self {
        Self {
            date: Some(Local::now().date_naive()),
            hour: DEFAULT_HOUR,
            minute: 0,
            text: String::new(),
        }
    }
}

impl NoteInput {
    /// Pre-fills the input from an existing note.
    pub fn from_note(note: &Note) -> Self {
        use chrono::Timelike;
        Self {
            date: Some(note.date_time.date()),
            hour: note.date_time.hour(),
            minute: note.date_time.minute(),
            text: note.text.clone(),
        }
    }

    /// Validates the input and builds a new note with the given id.
    ///
    /// Seconds are always zero and the text is trimmed.
    pub fn apply(&self, id: i32) -> Result<Note, NoteInputError> {
        let date = self.date.ok_or(NoteInputError::MissingDate)?;

        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).ok_or(
            NoteInputError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            },
        )?;

        let text = self.text.trim();
        if text.is_empty() {
            return Err(NoteInputError::EmptyText);
        }

        Ok(Note::new(id, date.and_time(time), text))
    }
}

/// Parses a `YYYY-MM-DD` date; blank or malformed input yields `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parses an `HH:MM` time into hour and minute without range checks.
pub fn parse_hour_minute(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.trim().split_once(':')?;
    Some((h.parse().ok()?, m.parse().ok()?))
}
