//! Unit-aware formatting of distances, speeds and durations.
//!
//! All values are stored in metric units (km, km/h, seconds). [`FormatUtils`]
//! converts them for display in the configured [`UnitSystem`].

use crate::enums::{SpeedMode, UnitSystem};

/// Kilometers per statute mile.
const KM_PER_MILE: f64 = 1.609_344;

pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Formats values for the current unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatUtils {
    unit_system: UnitSystem,
    speed_mode: SpeedMode,
}

impl Default for FormatUtils {
    fn default() -> Self {
        Self::new(UnitSystem::default(), SpeedMode::default())
    }
}

impl FormatUtils {
    /// `speed_mode` is used by [`speed_to_string`](Self::speed_to_string)
    /// callers that have no per-sport setting.
    pub fn new(unit_system: UnitSystem, speed_mode: SpeedMode) -> Self {
        Self {
            unit_system,
            speed_mode,
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    pub fn distance_unit_name(&self) -> &'static str {
        match self.unit_system {
            UnitSystem::Metric => "km",
            UnitSystem::English => "mi",
        }
    }

    pub fn speed_unit_name(&self, mode: SpeedMode) -> &'static str {
        match (self.unit_system, mode) {
            (UnitSystem::Metric, SpeedMode::Speed) => "km/h",
            (UnitSystem::English, SpeedMode::Speed) => "mph",
            (UnitSystem::Metric, SpeedMode::Pace) => "min/km",
            (UnitSystem::English, SpeedMode::Pace) => "min/mi",
        }
    }

    /// Formats a distance given in km, e.g. `"12.5 km"`.
    pub fn distance_to_string(&self, km: f64, decimals: usize) -> String {
        let value = match self.unit_system {
            UnitSystem::Metric => km,
            UnitSystem::English => km_to_miles(km),
        };
        format!("{value:.decimals$} {}", self.distance_unit_name())
    }

    /// Formats a speed given in km/h as speed or pace.
    ///
    /// `decimals` only applies to speed; pace is always `mm:ss`.
    pub fn speed_to_string(&self, kmh: f64, decimals: usize, mode: SpeedMode) -> String {
        let per_hour = match self.unit_system {
            UnitSystem::Metric => kmh,
            UnitSystem::English => km_to_miles(kmh),
        };

        match mode {
            SpeedMode::Speed => {
                format!("{per_hour:.decimals$} {}", self.speed_unit_name(mode))
            }
            SpeedMode::Pace => {
                format!("{} {}", pace_string(per_hour), self.speed_unit_name(mode))
            }
        }
    }

    /// Formats seconds as `h:mm:ss`.
    pub fn seconds_to_time_string(&self, seconds: u32) -> String {
        let h = seconds / 3600;
        let m = (seconds % 3600) / 60;
        let s = seconds % 60;
        format!("{h}:{m:02}:{s:02}")
    }
}

/// Converts a per-hour speed into a `mm:ss` pace per distance unit.
fn pace_string(per_hour: f64) -> String {
    if per_hour <= 0.0 || !per_hour.is_finite() {
        return "00:00".to_string();
    }
    let total_seconds = (3600.0 / per_hour).round() as u64;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
