//! Configuration management for SportsTracker.
//!
//! This crate resolves the data directory (default `~/.sportstracker`,
//! overridable with `--datadir=<path>`) and loads and saves the application
//! options stored in `options.yaml` inside it.

pub mod data_dir;
pub mod options;

pub use data_dir::{
    DATADIR_PARAM, default_data_dir, ensure_data_dir, evaluate_command_line_parameters,
};
pub use options::{ConfigError, StOptions, load_options, save_options};
