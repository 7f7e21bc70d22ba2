//! Filter for exercise queries.

use chrono::NaiveDate;

use st_core::{Exercise, Intensity};

/// Criteria for selecting exercises. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseFilter {
    /// First day to include.
    pub date_start: Option<NaiveDate>,
    /// Last day to include.
    pub date_end: Option<NaiveDate>,
    pub sport_type_id: Option<i32>,
    pub intensity: Option<Intensity>,
    /// Case-insensitive substring of the comment.
    pub comment_contains: Option<String>,
}

impl ExerciseFilter {
    /// Returns `true` if the exercise satisfies every set criterion.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let day = exercise.date_time.date();
        if self.date_start.is_some_and(|start| day < start) {
            return false;
        }
        if self.date_end.is_some_and(|end| day > end) {
            return false;
        }
        if self
            .sport_type_id
            .is_some_and(|id| exercise.sport_type_id != id)
        {
            return false;
        }
        if self.intensity.is_some_and(|i| exercise.intensity != i) {
            return false;
        }
        if let Some(ref needle) = self.comment_contains {
            if !exercise
                .comment
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}
