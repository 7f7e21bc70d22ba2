//! Exercise persistence for [`SqliteStore`].

use rusqlite::{Connection, params};

use st_core::Exercise;

use crate::error::{Result, StorageError};
use crate::sqlite::store::{SqliteStore, format_date_time, parse_date_time};

pub(crate) fn insert_exercise(conn: &Connection, exercise: &Exercise) -> Result<()> {
    conn.execute(
        "INSERT INTO exercises
            (id, date_time, sport_type_id, intensity, duration, distance, avg_speed, comment)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            exercise.id,
            format_date_time(&exercise.date_time),
            exercise.sport_type_id,
            exercise.intensity.as_str(),
            exercise.duration,
            exercise.distance,
            exercise.avg_speed,
            exercise.comment,
        ],
    )?;
    Ok(())
}

impl SqliteStore {
    /// Loads all exercises ordered by date.
    pub fn load_exercises_impl(&self) -> Result<Vec<Exercise>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, date_time, sport_type_id, intensity, duration, distance, avg_speed, comment
             FROM exercises ORDER BY date_time, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, u32>(4)?,
                row.get::<_, Option<f64>>(5)?,
                row.get::<_, Option<f64>>(6)?,
                row.get::<_, String>(7)?,
            ))
        })?;

        let mut exercises = Vec::new();
        for row in rows {
            let (id, date_time, sport_type_id, intensity, duration, distance, avg_speed, comment) =
                row?;
            let date_time = parse_date_time(&date_time).ok_or_else(|| {
                StorageError::corrupt("exercise", id, format!("bad timestamp '{date_time}'"))
            })?;
            let intensity = intensity
                .parse()
                .map_err(|e| StorageError::corrupt("exercise", id, format!("{e}")))?;
            exercises.push(Exercise {
                id,
                date_time,
                sport_type_id,
                intensity,
                duration,
                distance,
                avg_speed,
                comment,
            });
        }
        Ok(exercises)
    }
}
