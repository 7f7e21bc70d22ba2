//! Sport type persistence for [`SqliteStore`].

use rusqlite::{Connection, params};

use st_core::SportType;

use crate::error::{Result, StorageError};
use crate::sqlite::store::SqliteStore;

/// Inserts a sport type at the given list position.
pub(crate) fn insert_sport_type(
    conn: &Connection,
    sport_type: &SportType,
    position: usize,
) -> Result<()> {
    conn.execute(
        "INSERT INTO sport_types (id, position, name, speed_mode, record_distance, color)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            sport_type.id,
            position as i64,
            sport_type.name,
            sport_type.speed_mode.as_str(),
            sport_type.record_distance,
            sport_type.color,
        ],
    )?;
    Ok(())
}

impl SqliteStore {
    /// Loads all sport types in list order.
    pub fn load_sport_types_impl(&self) -> Result<Vec<SportType>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, speed_mode, record_distance, color
             FROM sport_types ORDER BY position, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?;

        let mut sport_types = Vec::new();
        for row in rows {
            let (id, name, speed_mode, record_distance, color) = row?;
            let speed_mode = speed_mode
                .parse()
                .map_err(|e| StorageError::corrupt("sport type", id, format!("{e}")))?;
            sport_types.push(SportType {
                id,
                name,
                speed_mode,
                record_distance,
                color,
            });
        }
        Ok(sport_types)
    }
}
