//! Note persistence for [`SqliteStore`].

use rusqlite::{Connection, params};

use st_core::Note;

use crate::error::{Result, StorageError};
use crate::sqlite::store::{SqliteStore, format_date_time, parse_date_time};

pub(crate) fn insert_note(conn: &Connection, note: &Note) -> Result<()> {
    conn.execute(
        "INSERT INTO notes (id, date_time, text) VALUES (?1, ?2, ?3)",
        params![note.id, format_date_time(&note.date_time), note.text],
    )?;
    Ok(())
}

impl SqliteStore {
    /// Loads all notes ordered by date.
    pub fn load_notes_impl(&self) -> Result<Vec<Note>> {
        let conn = self.lock_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, date_time, text FROM notes ORDER BY date_time, id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut notes = Vec::new();
        for row in rows {
            let (id, date_time, text) = row?;
            let date_time = parse_date_time(&date_time).ok_or_else(|| {
                StorageError::corrupt("note", id, format!("bad timestamp '{date_time}'"))
            })?;
            notes.push(Note { id, date_time, text });
        }
        Ok(notes)
    }
}
