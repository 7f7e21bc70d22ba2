//! Application options and their persistence.
//!
//! The main entry point is [`StOptions`], which represents the contents of
//! `options.yaml` in the data directory. Options are loaded with
//! [`load_options`], layering built-in defaults, the YAML file and `ST_*`
//! environment variables, and saved with [`save_options`].

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use st_core::{SpeedMode, UnitSystem};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the options file inside the data directory.
pub const OPTIONS_FILE: &str = "options.yaml";

/// Prefix of environment variables that override options.
const ENV_PREFIX: &str = "ST_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file or directory could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The layered configuration could not be extracted.
    #[error("failed to load options: {0}")]
    Load(#[from] figment::Error),

    /// The options could not be serialized to YAML.
    #[error("failed to write options: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// An option key does not exist.
    #[error("unknown option '{0}'")]
    UnknownKey(String),

    /// An option value was invalid.
    #[error("invalid value for option '{key}': {reason}")]
    InvalidValue {
        /// The option key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// User options of the application.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// will be deserialized correctly with sensible default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StOptions {
    /// Speed mode used when exercises of different sport types are shown
    /// together.
    pub preferred_speed_mode: SpeedMode,

    /// Unit system for displaying distances and speeds.
    pub unit_system: UnitSystem,

    /// Weeks start on Sunday instead of Monday.
    pub week_start_sunday: bool,

    /// Calculate the missing value of distance, duration and average speed
    /// automatically when entering exercises.
    pub default_auto_calculation: bool,

    /// Store the application data without asking on exit.
    pub save_on_exit: bool,

    /// Show a second diagram in the exercise viewer.
    pub display_second_chart: bool,
}

impl Default for StOptions {
    fn default() -> Self {
        Self {
            preferred_speed_mode: SpeedMode::Speed,
            unit_system: UnitSystem::Metric,
            week_start_sunday: false,
            default_auto_calculation: true,
            save_on_exit: false,
            display_second_chart: false,
        }
    }
}

impl StOptions {
    /// All option keys in display order.
    pub const KEYS: &'static [&'static str] = &[
        "preferred_speed_mode",
        "unit_system",
        "week_start_sunday",
        "default_auto_calculation",
        "save_on_exit",
        "display_second_chart",
    ];

    /// Returns the option values as `(key, value)` string pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v)))
            .collect()
    }

    /// Returns the string form of a single option.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "preferred_speed_mode" => self.preferred_speed_mode.to_string(),
            "unit_system" => self.unit_system.to_string(),
            "week_start_sunday" => self.week_start_sunday.to_string(),
            "default_auto_calculation" => self.default_auto_calculation.to_string(),
            "save_on_exit" => self.save_on_exit.to_string(),
            "display_second_chart" => self.display_second_chart.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Sets a single option from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for unknown keys and
    /// [`ConfigError::InvalidValue`] when the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            reason,
        };
        match key {
            "preferred_speed_mode" => {
                self.preferred_speed_mode = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            "unit_system" => {
                self.unit_system = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            "week_start_sunday" => self.week_start_sunday = parse_bool(value).map_err(invalid)?,
            "default_auto_calculation" => {
                self.default_auto_calculation = parse_bool(value).map_err(invalid)?;
            }
            "save_on_exit" => self.save_on_exit = parse_bool(value).map_err(invalid)?,
            "display_second_chart" => {
                self.display_second_chart = parse_bool(value).map_err(invalid)?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

/// Parse a boolean option value (`true/false`, `yes/no`, `on/off`, `1/0`).
fn parse_bool(s: &str) -> std::result::Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load options from `options.yaml` inside the given data directory.
///
/// Values are layered: built-in defaults, then the YAML file (if present),
/// then `ST_*` environment variables (e.g. `ST_PREFERRED_SPEED_MODE=pace`).
///
/// # Errors
///
/// Returns [`ConfigError::Load`] if the file or an environment value cannot
/// be parsed.
pub fn load_options(data_dir: &Path) -> Result<StOptions> {
    let path = data_dir.join(OPTIONS_FILE);
    debug!(path = %path.display(), exists = path.exists(), "loading options");

    let options: StOptions = Figment::from(Serialized::defaults(StOptions::default()))
        .merge(Yaml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX).only(StOptions::KEYS))
        .extract()?;
    Ok(options)
}

/// Save options to `options.yaml` inside the given data directory.
///
/// The directory is created if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] on I/O failure or [`ConfigError::Serialize`]
/// if serialization fails.
pub fn save_options(data_dir: &Path, options: &StOptions) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let path = data_dir.join(OPTIONS_FILE);
    let yaml = serde_yaml::to_string(options)?;
    std::fs::write(&path, yaml)?;
    info!(path = %path.display(), "options saved");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let opts = StOptions::default();
        assert_eq!(opts.preferred_speed_mode, SpeedMode::Speed);
        assert_eq!(opts.unit_system, UnitSystem::Metric);
        assert!(opts.default_auto_calculation);
        assert!(!opts.save_on_exit);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        Jail::expect_with(|jail| {
            let opts = load_options(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(opts, StOptions::default());
            Ok(())
        });
    }

    #[test]
    fn test_partial_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file(OPTIONS_FILE, "preferred_speed_mode: pace\nsave_on_exit: true\n")?;
            let opts = load_options(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(opts.preferred_speed_mode, SpeedMode::Pace);
            assert!(opts.save_on_exit);
            // Everything else should be default
            assert_eq!(opts.unit_system, UnitSystem::Metric);
            assert!(opts.default_auto_calculation);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(OPTIONS_FILE, "unit_system: metric\n")?;
            jail.set_env("ST_UNIT_SYSTEM", "english");
            jail.set_env("ST_SOMETHING_ELSE", "ignored");
            let opts = load_options(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(opts.unit_system, UnitSystem::English);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(OPTIONS_FILE, "preferred_speed_mode: warp\n")?;
            assert!(load_options(jail.directory()).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_roundtrip_options() {
        // Inside a jail so env overrides set by other tests cannot leak in.
        Jail::expect_with(|jail| {
            let data_dir = jail.directory().join("data");

            let mut opts = StOptions::default();
            opts.preferred_speed_mode = SpeedMode::Pace;
            opts.week_start_sunday = true;

            save_options(&data_dir, &opts).map_err(|e| e.to_string())?;
            let loaded = load_options(&data_dir).map_err(|e| e.to_string())?;
            assert_eq!(loaded, opts);
            assert!(data_dir.join(OPTIONS_FILE).is_file());
            Ok(())
        });
    }

    #[test]
    fn test_set_and_get() {
        let mut opts = StOptions::default();
        opts.set("preferred_speed_mode", "PACE").unwrap();
        opts.set("week_start_sunday", "yes").unwrap();
        assert_eq!(opts.get("preferred_speed_mode").as_deref(), Some("pace"));
        assert_eq!(opts.get("week_start_sunday").as_deref(), Some("true"));

        assert!(matches!(
            opts.set("nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            opts.set("save_on_exit", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_entries_cover_all_keys() {
        let entries = StOptions::default().entries();
        assert_eq!(entries.len(), StOptions::KEYS.len());
        assert_eq!(entries[0], ("preferred_speed_mode", "speed".to_string()));
    }
}
