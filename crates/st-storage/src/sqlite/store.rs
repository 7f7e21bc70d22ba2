//! [`SqliteStore`] -- SQLite-backed storage implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDateTime;
use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::error::{Result, StorageError};
use crate::sqlite::{exercises, notes, schema, sport_types};
use crate::traits::ApplicationData;

/// Storage format of timestamps.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// SQLite-backed implementation of the [`Storage`](crate::traits::Storage) trait.
///
/// Wraps a [`rusqlite::Connection`] in a `Mutex` for thread safety.  All
/// public methods acquire the lock, execute SQL, and release it.
pub struct SqliteStore {
    /// The mutex-protected SQLite connection.
    pub(crate) conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at the given path.
    ///
    /// Enables WAL mode and foreign keys, then initialises the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(?path, "opening SQLite database");

        let conn = Connection::open(path).map_err(|e| {
            StorageError::Connection(format!("failed to open {}: {e}", path.display()))
        })?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.configure_connection()?;
        store.init_schema()?;

        Ok(store)
    }

    /// Opens an in-memory SQLite database (useful for tests).
    pub fn open_in_memory() -> Result<Self> {
        debug!("opening in-memory SQLite database");
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("failed to open in-memory db: {e}")))?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.configure_connection()?;
        store.init_schema()?;

        Ok(store)
    }

    /// Sets connection pragmas (WAL mode, foreign keys, busy timeout).
    fn configure_connection(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )
        .map_err(|e| StorageError::Connection(format!("failed to set pragmas: {e}")))?;

        Ok(())
    }

    /// Creates all tables if they do not exist, then runs migrations.
    fn init_schema(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        for stmt in schema::SCHEMA_STATEMENTS {
            conn.execute_batch(stmt).map_err(|e| StorageError::Migration {
                name: "init_schema".into(),
                reason: format!("{e}\nStatement: {}", truncate(stmt, 120)),
            })?;
        }

        // Check if schema is already at current version.
        let version = conn
            .query_row(
                "SELECT value FROM metadata WHERE key = 'schema_version'",
                [],
                |row| row.get::<_, String>(0),
            )
            .map(|v| v.parse::<i32>().unwrap_or(0))
            .unwrap_or(0);
        if version >= schema::CURRENT_SCHEMA_VERSION {
            debug!(version, "schema already at current version, skipping migrations");
            return Ok(());
        }

        Self::run_migrations_on_conn(&conn)?;

        conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?1)",
            params![schema::CURRENT_SCHEMA_VERSION.to_string()],
        )
        .map_err(|e| StorageError::Migration {
            name: "schema_version".into(),
            reason: e.to_string(),
        })?;

        info!("schema initialized (version {})", schema::CURRENT_SCHEMA_VERSION);
        Ok(())
    }

    /// Applies pending migrations tracked via the `metadata` table.
    fn run_migrations_on_conn(conn: &Connection) -> Result<()> {
        for &(name, sql) in schema::MIGRATIONS {
            let key = format!("migration:{name}");
            let already_applied: bool = conn
                .query_row(
                    "SELECT COUNT(*) FROM metadata WHERE key = ?1",
                    params![key],
                    |row| row.get::<_, i32>(0),
                )
                .unwrap_or(0)
                > 0;

            if already_applied {
                debug!(name, "migration already applied, skipping");
                continue;
            }

            debug!(name, "applying migration");
            conn.execute_batch(sql).map_err(|e| StorageError::Migration {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

            conn.execute(
                "INSERT INTO metadata (key, value) VALUES (?1, ?2)",
                params![key, "applied"],
            )
            .map_err(|e| StorageError::Migration {
                name: name.to_string(),
                reason: format!("failed to mark migration: {e}"),
            })?;
        }
        Ok(())
    }

    /// Replaces all stored data inside a single transaction.
    pub fn store_all_impl(&self, data: &ApplicationData<'_>) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        // Children first so foreign keys never dangle.
        tx.execute("DELETE FROM exercises", [])?;
        tx.execute("DELETE FROM notes", [])?;
        tx.execute("DELETE FROM sport_types", [])?;

        for (position, sport_type) in data.sport_types.iter().enumerate() {
            sport_types::insert_sport_type(&tx, sport_type, position)?;
        }
        for exercise in data.exercises {
            exercises::insert_exercise(&tx, exercise)?;
        }
        for note in data.notes {
            notes::insert_note(&tx, note)?;
        }

        tx.commit()?;
        info!(
            sport_types = data.sport_types.len(),
            exercises = data.exercises.len(),
            notes = data.notes.len(),
            "application data stored"
        );
        Ok(())
    }

    /// Acquires the connection lock. Helper used by all operation modules.
    pub(crate) fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StorageError::Connection(format!("mutex poisoned: {e}")))
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

/// Formats a timestamp for a TEXT column.
pub(crate) fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// Parses a TEXT timestamp written by [`format_date_time`].
pub(crate) fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// Truncates a string for error messages.
fn truncate(s: &str, max: usize) -> String {
    if s.len() > max {
        format!("{}...", &s[..max])
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Storage;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use st_core::{Exercise, Intensity, Note, SpeedMode, SportType};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap()
    }

    fn sample() -> (Vec<SportType>, Vec<Exercise>, Vec<Note>) {
        let sport_types = vec![
            SportType::new(2)
                .with_name("Running")
                .with_speed_mode(SpeedMode::Pace),
            SportType::new(1).with_name("Cycling"),
        ];

        let mut ride = Exercise::new(1, at(3, 9), 1);
        ride.intensity = Intensity::High;
        ride.duration = 5400;
        ride.distance = Some(45.5);
        ride.avg_speed = Some(30.33);
        ride.comment = "Headwind".into();
        let run = Exercise::new(2, at(4, 18), 2);

        let notes = vec![Note::new(1, at(5, 7), "Rest day")];
        (sport_types, vec![ride, run], notes)
    }

    #[test]
    fn open_in_memory() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.load_sport_types().unwrap().is_empty());
        assert!(store.load_exercises().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn schema_version_set() {
        let store = SqliteStore::open_in_memory().unwrap();
        let conn = store.lock_conn().unwrap();
        let version: String = conn
            .query_row(
                "SELECT value FROM metadata WHERE key = 'schema_version'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(version, schema::CURRENT_SCHEMA_VERSION.to_string());
    }

    #[test]
    fn idempotent_init() {
        let store = SqliteStore::open_in_memory().unwrap();
        // Re-init should succeed without error.
        store.init_schema().unwrap();
    }

    #[test]
    fn store_and_load_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        let (sport_types, exercises, notes) = sample();
        store
            .store_all(&ApplicationData {
                sport_types: &sport_types,
                exercises: &exercises,
                notes: &notes,
            })
            .unwrap();

        assert_eq!(store.load_sport_types().unwrap(), sport_types);
        assert_eq!(store.load_exercises().unwrap(), exercises);
        assert_eq!(store.load_notes().unwrap(), notes);
    }

    #[test]
    fn store_replaces_previous_data() {
        let store = SqliteStore::open_in_memory().unwrap();
        let (sport_types, exercises, notes) = sample();
        store
            .store_all(&ApplicationData {
                sport_types: &sport_types,
                exercises: &exercises,
                notes: &notes,
            })
            .unwrap();

        store
            .store_all(&ApplicationData {
                sport_types: &sport_types[..1],
                exercises: &[],
                notes: &[],
            })
            .unwrap();

        assert_eq!(store.load_sport_types().unwrap().len(), 1);
        assert!(store.load_exercises().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn dangling_sport_type_rolls_back() {
        let store = SqliteStore::open_in_memory().unwrap();
        let (sport_types, exercises, notes) = sample();
        store
            .store_all(&ApplicationData {
                sport_types: &sport_types,
                exercises: &exercises,
                notes: &notes,
            })
            .unwrap();

        let orphan = Exercise::new(9, at(9, 9), 42);
        let result = store.store_all(&ApplicationData {
            sport_types: &sport_types,
            exercises: &[orphan],
            notes: &[],
        });
        assert!(result.is_err());

        // Previous data is intact.
        assert_eq!(store.load_exercises().unwrap(), exercises);
        assert_eq!(store.load_notes().unwrap(), notes);
    }

    #[test]
    fn file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sportstracker.db");
        let (sport_types, exercises, notes) = sample();
        {
            let store = SqliteStore::open(&path).unwrap();
            store
                .store_all(&ApplicationData {
                    sport_types: &sport_types,
                    exercises: &exercises,
                    notes: &notes,
                })
                .unwrap();
        }
        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.load_notes().unwrap(), notes);
    }

    #[test]
    fn date_time_format_round_trip() {
        let dt = at(1, 23);
        assert_eq!(format_date_time(&dt), "2024-06-01T23:15:00");
        assert_eq!(parse_date_time(&format_date_time(&dt)), Some(dt));
        assert_eq!(parse_date_time("2024-06-01 23:15:00"), Some(dt));
        assert_eq!(parse_date_time("yesterday"), None);
    }
}
