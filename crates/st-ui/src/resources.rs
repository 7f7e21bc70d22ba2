//! User-facing text lookup.
//!
//! Texts are addressed by dotted keys such as `st.dlg.note.error.date`.
//! Values may contain positional placeholders `{0}`, `{1}`, ... which are
//! replaced by [`ResourceReader::get_string`]. A key without a text resolves
//! to the key itself so missing entries stay visible instead of failing.

use std::collections::HashMap;

/// English texts shipped with the application.
const ENGLISH: &[(&str, &str)] = &[
    ("common.error", "Error"),
    ("common.info", "Information"),
    ("common.warning", "Warning"),
    ("common.confirm", "Confirmation"),
    ("common.yes_no", "[y/N]"),
    ("st.dlg.note.title", "Edit Note"),
    ("st.dlg.note.title.add", "Add Note"),
    ("st.dlg.note.date", "Date:"),
    ("st.dlg.note.time", "Time (hh:mm):"),
    ("st.dlg.note.text", "Text:"),
    (
        "st.dlg.note.error.date",
        "Please enter a valid date for the note.",
    ),
    (
        "st.dlg.note.error.time",
        "The time {0} is not valid, please use hh:mm.",
    ),
    (
        "st.dlg.note.error.no_text",
        "Please enter the text of the note.",
    ),
    ("st.dlg.note.saved", "Note {0} has been saved."),
    ("st.view.note.delete.confirm", "Do you really want to delete note {0}?"),
    ("st.view.note.deleted", "Note {0} has been deleted."),
    (
        "st.view.exercise.delete.confirm",
        "Do you really want to delete exercise {0}?",
    ),
    ("st.view.exercise.deleted", "Exercise {0} has been deleted."),
    (
        "st.dlg.sporttype.delete.confirm",
        "Do you really want to delete sport type {0}?",
    ),
    (
        "st.dlg.sporttype.error.in_use",
        "The sport type {0} can't be deleted, it is used by {1} exercise(s).",
    ),
    ("st.dlg.sporttype.deleted", "Sport type {0} has been deleted."),
    ("st.main.cancelled", "Cancelled."),
];

/// Key-to-text lookup with positional placeholder substitution.
#[derive(Debug, Clone)]
pub struct ResourceReader {
    texts: HashMap<String, String>,
}

impl Default for ResourceReader {
    fn default() -> Self {
        Self::english()
    }
}

impl ResourceReader {
    /// Reader with the built-in English texts.
    pub fn english() -> Self {
        Self {
            texts: ENGLISH
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Adds or replaces a text.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(key.into(), text.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.texts.contains_key(key)
    }

    /// Returns the raw text for `key`, or the key itself when unknown.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.texts.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Returns the text for `key` with `{n}` replaced by `args[n]`.
    ///
    /// Placeholders without a matching argument are left as they are.
    /// Argument text is inserted verbatim and never substituted again.
    pub fn get_string(&self, key: &str, args: &[&str]) -> String {
        let template = self.get(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let arg = after.find('}').and_then(|close| {
                let index: usize = after[..close].parse().ok()?;
                Some((*args.get(index)?, close))
            });
            match arg {
                Some((arg, close)) => {
                    out.push_str(arg);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}
