//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the resolved
//! data directory and the global output flags. It also opens the document
//! and builds the terminal UI context.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use st_config::evaluate_command_line_parameters;
use st_core::format::FormatUtils;
use st_document::StDocument;
use st_ui::{ResourceReader, TerminalContext};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Resolved data directory.
    pub data_dir: PathBuf,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments and the raw
    /// command-line tokens.
    ///
    /// The data directory is resolved from the raw tokens so that only the
    /// `--datadir=<path>` form counts and the last non-empty one wins.
    pub fn from_global_args<I, S>(global: &GlobalArgs, raw_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            data_dir: evaluate_command_line_parameters(raw_args),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Opens the document: loads options and application data.
    pub fn open_document(&self) -> Result<StDocument> {
        let mut document = StDocument::new(&self.data_dir);
        document
            .load_options()
            .with_context(|| format!("failed to load options from {}", self.data_dir.display()))?;
        document.read_application_data().with_context(|| {
            format!(
                "failed to read application data from {}",
                document.database_path().display()
            )
        })?;
        debug!(data_dir = %self.data_dir.display(), "document opened");
        Ok(document)
    }

    /// Stores the application data if it changed.
    pub fn save_document(&self, document: &mut StDocument) -> Result<()> {
        if !document.is_dirty() {
            return Ok(());
        }
        document.store_application_data().with_context(|| {
            format!(
                "failed to store application data to {}",
                document.database_path().display()
            )
        })
    }

    /// Terminal UI context using the document's unit and speed settings.
    pub fn ui(
        &self,
        document: &StDocument,
    ) -> TerminalContext<std::io::StdinLock<'static>, std::io::Stderr> {
        let options = document.options();
        TerminalContext::stdio(
            ResourceReader::english(),
            FormatUtils::new(options.unit_system, options.preferred_speed_mode),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn global() -> GlobalArgs {
        GlobalArgs {
            datadir: None,
            json: true,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn data_dir_from_raw_args() {
        let ctx = RuntimeContext::from_global_args(
            &global(),
            ["sportstracker", "--datadir=a", "info", "--datadir=b"],
        );
        assert_eq!(ctx.data_dir, Path::new("b"));
        assert!(ctx.json);
    }

    #[test]
    fn open_document_creates_database() {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = format!("--datadir={}", tmp.path().display());
        let ctx = RuntimeContext::from_global_args(&global(), [datadir.as_str()]);
        let document = ctx.open_document().unwrap();
        assert!(document.sport_types().is_empty());
        assert!(document.database_path().is_file());
    }
}
