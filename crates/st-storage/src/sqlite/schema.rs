//! DDL statements and migrations for the SQLite schema.
//!
//! Timestamps are stored as TEXT in `YYYY-MM-DDTHH:MM:SS` format (local time,
//! no zone). Booleans are stored as INTEGER (0/1). Enums are stored as their
//! lowercase string form.

/// Current schema version. Bumped whenever DDL or migrations change.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Core DDL statements executed during `init_schema`.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    // -- Sport types table ---------------------------------------------------
    r#"
    CREATE TABLE IF NOT EXISTS sport_types (
        id              INTEGER PRIMARY KEY,
        position        INTEGER NOT NULL DEFAULT 0,
        name            TEXT NOT NULL DEFAULT '',
        speed_mode      TEXT NOT NULL DEFAULT 'speed',
        record_distance INTEGER NOT NULL DEFAULT 1,
        color           TEXT
    )
    "#,
    // -- Exercises table -----------------------------------------------------
    r#"
    CREATE TABLE IF NOT EXISTS exercises (
        id            INTEGER PRIMARY KEY,
        date_time     TEXT NOT NULL,
        sport_type_id INTEGER NOT NULL REFERENCES sport_types(id),
        intensity     TEXT NOT NULL DEFAULT 'normal',
        duration      INTEGER NOT NULL DEFAULT 0,
        distance      REAL,
        avg_speed     REAL,
        comment       TEXT NOT NULL DEFAULT ''
    )
    "#,
    // -- Notes table ---------------------------------------------------------
    r#"
    CREATE TABLE IF NOT EXISTS notes (
        id        INTEGER PRIMARY KEY,
        date_time TEXT NOT NULL,
        text      TEXT NOT NULL
    )
    "#,
    // -- Metadata table ------------------------------------------------------
    r#"
    CREATE TABLE IF NOT EXISTS metadata (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
];

/// Schema migrations applied after initial DDL.
///
/// Each migration is a `(name, sql)` pair. Migrations are tracked in the
/// `metadata` table under the key `migration:<name>` so they run at most once.
pub const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_date_indexes",
        "CREATE INDEX IF NOT EXISTS idx_exercises_date_time ON exercises(date_time);
         CREATE INDEX IF NOT EXISTS idx_notes_date_time ON notes(date_time);",
    ),
];
