//! Exercise -- a single recorded workout.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::Intensity;
use crate::id_list::IdObject;

/// A recorded exercise.
///
/// The sport type is referenced by id; resolve it through the sport type
/// list of the owning document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i32,

    pub date_time: NaiveDateTime,

    pub sport_type_id: i32,

    #[serde(default)]
    pub intensity: Intensity,

    /// Duration in seconds.
    #[serde(default)]
    pub duration: u32,

    /// Distance in kilometers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Average speed in km/h.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_speed: Option<f64>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Exercise {
    /// Creates an exercise with the given id, timestamp and sport type.
    pub fn new(id: i32, date_time: NaiveDateTime, sport_type_id: i32) -> Self {
        Self {
            id,
            date_time,
            sport_type_id,
            intensity: Intensity::default(),
            duration: 0,
            distance: None,
            avg_speed: None,
            comment: String::new(),
        }
    }

    /// Computes the average speed in km/h from distance and duration.
    ///
    /// Returns `None` when either value is missing or zero.
    pub fn calculate_avg_speed(&self) -> Option<f64> {
        let distance = self.distance.filter(|d| *d > 0.0)?;
        if self.duration == 0 {
            return None;
        }
        Some(distance / (f64::from(self.duration) / 3600.0))
    }
}

impl IdObject for Exercise {
    fn id(&self) -> i32 {
        self.id
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        Some(self.date_time)
    }
}
