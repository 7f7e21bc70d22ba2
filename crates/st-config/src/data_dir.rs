//! Resolution and management of the SportsTracker data directory.
//!
//! The data directory holds the database and the options file. It defaults
//! to `<home>/.sportstracker` and can be overridden on the command line with
//! `--datadir=<path>`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::options::ConfigError;

/// The name of the data directory below the user's home directory.
const DATA_DIR_NAME: &str = ".sportstracker";

/// Command-line token prefix that overrides the data directory.
///
/// Only the `=`-joined form is recognized; `--datadir <path>` is not.
pub const DATADIR_PARAM: &str = "--datadir=";

/// Returns the default data directory `<home>/.sportstracker`.
///
/// Falls back to a relative `.sportstracker` when the home directory cannot
/// be determined.
pub fn default_data_dir() -> PathBuf {
    match dirs_next::home_dir() {
        Some(home) => home.join(DATA_DIR_NAME),
        None => PathBuf::from(DATA_DIR_NAME),
    }
}

/// Resolves the data directory from command-line tokens.
///
/// Every token starting with `--datadir=` sets the directory to its suffix;
/// the last such token wins. Tokens with an empty suffix and all other
/// tokens are ignored. Without a match the default directory is returned.
///
/// # Examples
///
/// ```
/// use st_config::evaluate_command_line_parameters;
/// use std::path::PathBuf;
///
/// let dir = evaluate_command_line_parameters(["--foo", "--datadir=temp"]);
/// assert_eq!(dir, PathBuf::from("temp"));
/// ```
pub fn evaluate_command_line_parameters<I, S>(tokens: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut data_dir = None;
    for token in tokens {
        if let Some(path) = token.as_ref().strip_prefix(DATADIR_PARAM) {
            if path.is_empty() {
                continue;
            }
            debug!(path, "data directory overridden on command line");
            data_dir = Some(PathBuf::from(path));
        }
    }
    data_dir.unwrap_or_else(default_data_dir)
}

/// Ensure the data directory exists, creating it and any missing parents.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if directory creation fails or the path
/// exists but is not a directory.
pub fn ensure_data_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    std::fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_dir_ends_with_sportstracker() {
        let dir = default_data_dir();
        assert!(dir.ends_with(".sportstracker"));
        if let Some(home) = dirs_next::home_dir() {
            assert_eq!(dir, home.join(".sportstracker"));
        }
    }

    #[test]
    fn no_tokens_yields_default() {
        let dir = evaluate_command_line_parameters(Vec::<String>::new());
        assert_eq!(dir, default_data_dir());
    }

    #[test]
    fn separate_value_is_not_supported() {
        let dir = evaluate_command_line_parameters(["--datadir", "temp"]);
        assert_eq!(dir, default_data_dir());
    }

    #[test]
    fn equals_form_overrides_default() {
        let dir = evaluate_command_line_parameters(["--foo", "--datadir=temp"]);
        assert_eq!(dir, PathBuf::from("temp"));
    }

    #[test]
    fn last_token_wins() {
        let dir = evaluate_command_line_parameters(["--datadir=first", "x", "--datadir=second"]);
        assert_eq!(dir, PathBuf::from("second"));
    }

    #[test]
    fn empty_value_is_ignored() {
        let dir = evaluate_command_line_parameters(["--datadir=one", "--datadir="]);
        assert_eq!(dir, PathBuf::from("one"));
    }

    #[test]
    fn prefix_must_match_exactly() {
        let dir = evaluate_command_line_parameters(["--datadirx=temp", "-datadir=temp"]);
        assert_eq!(dir, default_data_dir());
    }

    #[test]
    fn ensure_data_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b");
        let result = ensure_data_dir(&target).unwrap();
        assert!(result.is_dir());
        // Idempotent.
        ensure_data_dir(&target).unwrap();
    }
}
