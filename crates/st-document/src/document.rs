//! [`StDocument`] -- the application document.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use st_config::{StOptions, default_data_dir, ensure_data_dir, evaluate_command_line_parameters};
use st_core::validation::{NoteInput, note_keys};
use st_core::{Exercise, IdObjectList, Note, SpeedMode, SportType};
use st_storage::{ApplicationData, SqliteStore, Storage};

use crate::error::{DocumentError, Result};
use crate::filter::ExerciseFilter;

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "sportstracker.db";

/// In-memory application data plus options and the data directory.
///
/// Every mutation through the document marks it dirty; reading or storing
/// the application data clears the flag.
#[derive(Debug, Clone)]
pub struct StDocument {
    data_dir: PathBuf,
    options: StOptions,
    sport_types: IdObjectList<SportType>,
    exercises: IdObjectList<Exercise>,
    notes: IdObjectList<Note>,
    dirty: bool,
}

impl Default for StDocument {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

impl StDocument {
    /// Creates an empty document using the given data directory and default
    /// options.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            options: StOptions::default(),
            sport_types: IdObjectList::new(),
            exercises: IdObjectList::new(),
            notes: IdObjectList::new(),
            dirty: false,
        }
    }

    // -- Data directory and options ------------------------------------------

    /// Resolves the data directory from command-line tokens.
    ///
    /// Only `--datadir=<path>` is recognized (last one wins); without it the
    /// default `<home>/.sportstracker` is used.
    pub fn evaluate_command_line_parameters<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.data_dir = evaluate_command_line_parameters(tokens);
        debug!(data_dir = %self.data_dir.display(), "data directory resolved");
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn options(&self) -> &StOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut StOptions {
        &mut self.options
    }

    /// Loads the options from the data directory (defaults when missing).
    pub fn load_options(&mut self) -> Result<()> {
        self.options = st_config::load_options(&self.data_dir)?;
        debug!(options = ?self.options, "options loaded");
        Ok(())
    }

    /// Writes the options to the data directory.
    pub fn store_options(&self) -> Result<()> {
        st_config::save_options(&self.data_dir, &self.options)?;
        Ok(())
    }

    // -- Application data ----------------------------------------------------

    /// Reads all application data from the database in the data directory.
    ///
    /// The data directory and an empty database are created when missing.
    pub fn read_application_data(&mut self) -> Result<()> {
        ensure_data_dir(&self.data_dir)?;
        let store = SqliteStore::open(self.database_path())?;
        self.read_application_data_from(&store)?;
        store.close()?;
        Ok(())
    }

    /// Replaces the in-memory lists with the contents of `storage`.
    pub fn read_application_data_from(&mut self, storage: &dyn Storage) -> Result<()> {
        let sport_types = storage.load_sport_types()?;
        let exercises = storage.load_exercises()?;
        let notes = storage.load_notes()?;

        self.sport_types = IdObjectList::from_entries(sport_types);
        self.exercises = IdObjectList::from_entries(exercises);
        self.notes = IdObjectList::from_entries(notes);
        self.dirty = false;

        info!(
            sport_types = self.sport_types.len(),
            exercises = self.exercises.len(),
            notes = self.notes.len(),
            "application data read"
        );
        Ok(())
    }

    /// Writes all application data to the database in the data directory.
    pub fn store_application_data(&mut self) -> Result<()> {
        ensure_data_dir(&self.data_dir)?;
        let store = SqliteStore::open(self.database_path())?;
        self.store_application_data_to(&store)?;
        store.close()?;
        Ok(())
    }

    /// Writes all lists to `storage` as one unit.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SportTypeNotFound`] without writing anything
    /// if an exercise references a sport type that is not in the list.
    pub fn store_application_data_to(&mut self, storage: &dyn Storage) -> Result<()> {
        if let Some(orphan) = self
            .exercises
            .iter()
            .find(|e| !self.sport_types.contains(e.sport_type_id))
        {
            return Err(DocumentError::SportTypeNotFound(orphan.sport_type_id));
        }

        storage.store_all(&ApplicationData {
            sport_types: self.sport_types.as_slice(),
            exercises: self.exercises.as_slice(),
            notes: self.notes.as_slice(),
        })?;
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if data changed since the last read or store.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // -- Lists ---------------------------------------------------------------

    pub fn sport_types(&self) -> &IdObjectList<SportType> {
        &self.sport_types
    }

    pub fn exercises(&self) -> &IdObjectList<Exercise> {
        &self.exercises
    }

    pub fn notes(&self) -> &IdObjectList<Note> {
        &self.notes
    }

    /// Inserts or replaces a sport type.
    pub fn set_sport_type(&mut self, sport_type: SportType) {
        self.sport_types.set(sport_type);
        self.dirty = true;
    }

    /// Inserts or replaces an exercise.
    pub fn set_exercise(&mut self, exercise: Exercise) {
        self.exercises.set(exercise);
        self.dirty = true;
    }

    /// Inserts or replaces a note.
    pub fn set_note(&mut self, note: Note) {
        self.notes.set(note);
        self.dirty = true;
    }

    /// Validates `input` and stores the resulting note under `id`.
    ///
    /// A new note replaces any existing one with the same id. On validation
    /// failure the document is left unchanged.
    pub fn save_note_input(&mut self, id: i32, input: &NoteInput) -> Result<&Note> {
        let note = input.apply(id)?;
        self.set_note(note);
        self.notes.get_by_id(id).ok_or(DocumentError::NoteNotFound(id))
    }

    /// Resource key of the note editor title: the "add" title for an id that
    /// is not in the note list yet.
    pub fn note_title_key(&self, id: i32) -> &'static str {
        if self.notes.contains(id) {
            note_keys::TITLE
        } else {
            note_keys::TITLE_ADD
        }
    }

    /// Returns `true` if any exercise references the sport type.
    pub fn is_sport_type_in_use(&self, sport_type_id: i32) -> bool {
        self.exercises
            .iter()
            .any(|e| e.sport_type_id == sport_type_id)
    }

    /// Removes a sport type that no exercise references.
    pub fn remove_sport_type(&mut self, id: i32) -> Result<SportType> {
        let count = self
            .exercises
            .iter()
            .filter(|e| e.sport_type_id == id)
            .count();
        if count > 0 {
            return Err(DocumentError::SportTypeInUse { id, count });
        }
        let removed = self
            .sport_types
            .remove_by_id(id)
            .ok_or(DocumentError::SportTypeNotFound(id))?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn remove_exercise(&mut self, id: i32) -> Result<Exercise> {
        let removed = self
            .exercises
            .remove_by_id(id)
            .ok_or(DocumentError::ExerciseNotFound(id))?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn remove_note(&mut self, id: i32) -> Result<Note> {
        let removed = self
            .notes
            .remove_by_id(id)
            .ok_or(DocumentError::NoteNotFound(id))?;
        self.dirty = true;
        Ok(removed)
    }

    // -- Queries -------------------------------------------------------------

    /// Returns the speed mode to use when displaying the given exercises.
    ///
    /// If all exercises belong to sport types with the same speed mode, that
    /// mode is returned; otherwise the preferred speed mode from the options.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidArgument`] when `exercise_ids` is
    /// `None` or empty, and a not-found error for unknown exercises or sport
    /// types.
    pub fn speed_mode_for_exercises(&self, exercise_ids: Option<&[i32]>) -> Result<SpeedMode> {
        let ids = match exercise_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => {
                return Err(DocumentError::InvalidArgument(
                    "at least one exercise id is required".into(),
                ));
            }
        };

        let mut resolved: Option<SpeedMode> = None;
        for &id in ids {
            let exercise = self
                .exercises
                .get_by_id(id)
                .ok_or(DocumentError::ExerciseNotFound(id))?;
            let sport_type = self
                .sport_types
                .get_by_id(exercise.sport_type_id)
                .ok_or(DocumentError::SportTypeNotFound(exercise.sport_type_id))?;

            match resolved {
                None => resolved = Some(sport_type.speed_mode),
                Some(mode) if mode != sport_type.speed_mode => {
                    return Ok(self.options.preferred_speed_mode);
                }
                Some(_) => {}
            }
        }

        Ok(resolved.unwrap_or(self.options.preferred_speed_mode))
    }

    /// Returns the exercises matching `filter` in date order.
    pub fn filter_exercises(&self, filter: &ExerciseFilter) -> Vec<&Exercise> {
        self.exercises.iter().filter(|e| filter.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    /// Document on a fresh temp data dir with options loaded, like the
    /// application does on startup.
    fn setup() -> (tempfile::TempDir, StDocument) {
        let tmp = tempfile::tempdir().unwrap();
        let mut document = StDocument::new(tmp.path());
        document.load_options().unwrap();
        (tmp, document)
    }

    fn append_exercise_with_speed_mode(document: &mut StDocument, speed_mode: SpeedMode) -> i32 {
        let sport_type =
            SportType::new(document.sport_types().new_id()).with_speed_mode(speed_mode);
        let exercise = Exercise::new(
            document.exercises().new_id(),
            Local::now().naive_local(),
            sport_type.id,
        );
        let id = exercise.id;
        document.set_sport_type(sport_type);
        document.set_exercise(exercise);
        id
    }

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, day)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    }

    #[test]
    fn evaluate_command_line_parameters() {
        let (_tmp, mut document) = setup();
        let default_data_dir = default_data_dir();

        document.evaluate_command_line_parameters(Vec::<String>::new());
        assert_eq!(document.data_dir(), default_data_dir.as_path());

        // must not work, the user must use the '=' character
        document.evaluate_command_line_parameters(["--datadir", "temp"]);
        assert_eq!(document.data_dir(), default_data_dir.as_path());

        document.evaluate_command_line_parameters(["--foo", "--datadir=temp"]);
        assert_eq!(document.data_dir(), Path::new("temp"));

        // A later evaluation without the flag falls back to the default.
        document.evaluate_command_line_parameters(["--foo"]);
        assert_eq!(document.data_dir(), default_data_dir.as_path());
    }

    #[test]
    fn speed_mode_for_exercises_empty() {
        let (_tmp, document) = setup();
        assert!(matches!(
            document.speed_mode_for_exercises(None),
            Err(DocumentError::InvalidArgument(_))
        ));
        assert!(matches!(
            document.speed_mode_for_exercises(Some(&[])),
            Err(DocumentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn speed_mode_for_exercises_with_same_speed_mode() {
        let (_tmp, mut document) = setup();
        let id1 = append_exercise_with_speed_mode(&mut document, SpeedMode::Pace);
        let id2 = append_exercise_with_speed_mode(&mut document, SpeedMode::Pace);

        let speed_mode = document.speed_mode_for_exercises(Some(&[id1, id2])).unwrap();
        assert_eq!(speed_mode, SpeedMode::Pace);
    }

    #[test]
    fn speed_mode_for_exercises_with_different_speed_mode() {
        let (_tmp, mut document) = setup();
        let id1 = append_exercise_with_speed_mode(&mut document, SpeedMode::Pace);
        let id2 = append_exercise_with_speed_mode(&mut document, SpeedMode::Speed);

        let speed_mode = document.speed_mode_for_exercises(Some(&[id1, id2])).unwrap();
        assert_eq!(speed_mode, document.options().preferred_speed_mode);

        // The preferred mode is taken from the options, whatever it is.
        document.options_mut().preferred_speed_mode = SpeedMode::Pace;
        let speed_mode = document.speed_mode_for_exercises(Some(&[id2, id1])).unwrap();
        assert_eq!(speed_mode, SpeedMode::Pace);
    }

    #[test]
    fn speed_mode_for_unknown_ids() {
        let (_tmp, mut document) = setup();
        assert!(matches!(
            document.speed_mode_for_exercises(Some(&[99])),
            Err(DocumentError::ExerciseNotFound(99))
        ));

        document.set_exercise(Exercise::new(1, at(1), 7));
        assert!(matches!(
            document.speed_mode_for_exercises(Some(&[1])),
            Err(DocumentError::SportTypeNotFound(7))
        ));
    }

    #[test]
    fn note_input_replaces_note_wholesale() {
        let (_tmp, mut document) = setup();
        document.set_note(Note::new(1, at(1), "original"));

        let mut input = NoteInput::from_note(document.notes().get_by_id(1).unwrap());
        input.text = "   ".into();
        assert!(matches!(
            document.save_note_input(1, &input),
            Err(DocumentError::NoteInput(_))
        ));
        assert_eq!(document.notes().get_by_id(1).unwrap().text, "original");

        input.text = " edited ".into();
        input.hour = 21;
        let saved = document.save_note_input(1, &input).unwrap().clone();
        assert_eq!(saved.text, "edited");
        assert_eq!(saved.date_time, at(1).date().and_hms_opt(21, 0, 0).unwrap());
        assert_eq!(document.notes().len(), 1);
    }

    #[test]
    fn note_title_depends_on_existing_id() {
        let (_tmp, mut document) = setup();
        let id = document.notes().new_id();
        assert_eq!(document.note_title_key(id), "st.dlg.note.title.add");
        document.set_note(Note::new(id, at(1), "x"));
        assert_eq!(document.note_title_key(id), "st.dlg.note.title");
    }

    #[test]
    fn sport_type_in_use_cannot_be_removed() {
        let (_tmp, mut document) = setup();
        document.set_sport_type(SportType::new(1).with_name("Cycling"));
        document.set_exercise(Exercise::new(1, at(2), 1));

        assert!(document.is_sport_type_in_use(1));
        assert!(matches!(
            document.remove_sport_type(1),
            Err(DocumentError::SportTypeInUse { id: 1, count: 1 })
        ));

        document.remove_exercise(1).unwrap();
        assert!(!document.is_sport_type_in_use(1));
        assert_eq!(document.remove_sport_type(1).unwrap().name, "Cycling");
        assert!(matches!(
            document.remove_sport_type(1),
            Err(DocumentError::SportTypeNotFound(1))
        ));
    }

    #[test]
    fn dirty_flag_tracks_changes() {
        let (_tmp, mut document) = setup();
        assert!(!document.is_dirty());
        document.set_sport_type(SportType::new(1));
        assert!(document.is_dirty());
        document.store_application_data().unwrap();
        assert!(!document.is_dirty());
        document.remove_sport_type(1).unwrap();
        assert!(document.is_dirty());
        document.read_application_data().unwrap();
        assert!(!document.is_dirty());
        assert_eq!(document.sport_types().len(), 1);
    }

    #[test]
    fn application_data_round_trip() {
        let (tmp, mut document) = setup();
        document.set_sport_type(
            SportType::new(1)
                .with_name("Running")
                .with_speed_mode(SpeedMode::Pace),
        );
        let mut run = Exercise::new(1, at(3), 1);
        run.distance = Some(10.0);
        run.duration = 3000;
        document.set_exercise(run);
        document.set_note(Note::new(1, at(4), "Easy week"));
        document.options_mut().week_start_sunday = true;

        document.store_application_data().unwrap();
        document.store_options().unwrap();
        assert!(tmp.path().join(DATABASE_FILE).is_file());

        let mut reloaded = StDocument::new(tmp.path());
        reloaded.load_options().unwrap();
        reloaded.read_application_data().unwrap();
        assert_eq!(reloaded.sport_types(), document.sport_types());
        assert_eq!(reloaded.exercises(), document.exercises());
        assert_eq!(reloaded.notes(), document.notes());
        assert!(reloaded.options().week_start_sunday);
    }

    #[test]
    fn same_time_entries_keep_order_after_reload() {
        let (tmp, mut document) = setup();
        document.set_sport_type(SportType::new(1));
        document.set_exercise(Exercise::new(2, at(7), 1));
        document.set_exercise(Exercise::new(1, at(7), 1));
        document.set_note(Note::new(3, at(7), "later id"));
        document.set_note(Note::new(1, at(7), "earlier id"));
        document.store_application_data().unwrap();

        let mut reloaded = StDocument::new(tmp.path());
        reloaded.read_application_data().unwrap();
        assert_eq!(reloaded.exercises().ids(), vec![1, 2]);
        assert_eq!(reloaded.exercises(), document.exercises());
        assert_eq!(reloaded.notes(), document.notes());
    }

    #[test]
    fn store_rejects_orphan_exercise() {
        let (tmp, mut document) = setup();
        document.set_exercise(Exercise::new(1, at(1), 5));
        assert!(matches!(
            document.store_application_data(),
            Err(DocumentError::SportTypeNotFound(5))
        ));
        assert!(document.is_dirty());

        let store = SqliteStore::open(tmp.path().join(DATABASE_FILE)).unwrap();
        assert!(store.load_exercises().unwrap().is_empty());
    }

    #[test]
    fn filter_exercises_in_date_order() {
        let (_tmp, mut document) = setup();
        document.set_sport_type(SportType::new(1));
        document.set_sport_type(SportType::new(2));
        document.set_exercise(Exercise::new(1, at(9), 1));
        document.set_exercise(Exercise::new(2, at(2), 2));
        document.set_exercise(Exercise::new(3, at(5), 1));

        let filter = ExerciseFilter {
            sport_type_id: Some(1),
            ..Default::default()
        };
        let ids: Vec<i32> = document
            .filter_exercises(&filter)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(document.filter_exercises(&ExerciseFilter::default()).len(), 3);
    }

    #[test]
    fn default_document_uses_default_options() {
        let document = StDocument::default();
        assert_eq!(document.data_dir(), default_data_dir().as_path());
        assert_eq!(document.options(), &StOptions::default());
    }
}
