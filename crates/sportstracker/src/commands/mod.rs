//! Command handlers, one module per subcommand.

pub mod exercise;
pub mod info;
pub mod note;
pub mod options_cmd;
pub mod speed_mode;
pub mod sport_type;
