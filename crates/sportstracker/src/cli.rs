//! Clap CLI definitions for the `sportstracker` command.

use clap::{Args, Parser, Subcommand};
use st_core::{Intensity, SpeedMode};

/// sportstracker -- record and review your exercises.
#[derive(Parser, Debug)]
#[command(
    name = "sportstracker",
    about = "Record and review exercises, sport types and notes",
    version,
    propagate_version = true,
    args_override_self = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Data directory (default: ~/.sportstracker). Must be given as --datadir=<DIR>.
    #[arg(long, global = true, require_equals = true, value_name = "DIR")]
    pub datadir: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the data directory and a summary of the stored data.
    Info,

    /// Show or change options.
    Options(OptionsArgs),

    /// Manage sport types.
    SportType(SportTypeArgs),

    /// Manage exercises.
    Exercise(ExerciseArgs),

    /// Manage calendar notes.
    Note(NoteArgs),

    /// Show the speed mode used to display a set of exercises.
    SpeedMode(SpeedModeArgs),
}

// ---------------------------------------------------------------------------
// options
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct OptionsArgs {
    #[command(subcommand)]
    pub command: OptionsCommands,
}

#[derive(Subcommand, Debug)]
pub enum OptionsCommands {
    /// Show all options.
    Show,
    /// Set one option.
    Set(OptionSetArgs),
}

#[derive(Args, Debug)]
pub struct OptionSetArgs {
    /// Option key (e.g. preferred_speed_mode).
    pub key: String,
    /// New value.
    pub value: String,
}

// ---------------------------------------------------------------------------
// sport-type
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct SportTypeArgs {
    #[command(subcommand)]
    pub command: SportTypeCommands,
}

#[derive(Subcommand, Debug)]
pub enum SportTypeCommands {
    /// Add a sport type.
    Add(SportTypeAddArgs),
    /// List sport types.
    List,
    /// Remove a sport type that is not used by any exercise.
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
pub struct SportTypeAddArgs {
    /// Name of the sport type.
    pub name: String,

    /// Show velocity as speed or pace.
    #[arg(long, default_value = "speed")]
    pub speed_mode: SpeedMode,

    /// Exercises of this type do not record a distance.
    #[arg(long)]
    pub no_distance: bool,

    /// Display color as #rrggbb.
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments shared by all remove subcommands.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Id of the entry to remove.
    pub id: i32,

    /// Do not ask for confirmation.
    #[arg(short, long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// exercise
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct ExerciseArgs {
    #[command(subcommand)]
    pub command: ExerciseCommands,
}

#[derive(Subcommand, Debug)]
pub enum ExerciseCommands {
    /// Add an exercise.
    Add(ExerciseAddArgs),
    /// List exercises in date order.
    List(ExerciseListArgs),
    /// Remove an exercise.
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
pub struct ExerciseAddArgs {
    /// Sport type id.
    #[arg(long = "sport-type")]
    pub sport_type: i32,

    /// Date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,

    /// Start time (HH:MM), default 12:00.
    #[arg(long)]
    pub time: Option<String>,

    /// Duration as seconds, MM:SS or H:MM:SS.
    #[arg(long, default_value = "0")]
    pub duration: String,

    /// Distance in kilometers.
    #[arg(long)]
    pub distance: Option<f64>,

    /// Average speed in km/h (calculated from distance and duration if omitted).
    #[arg(long)]
    pub avg_speed: Option<f64>,

    #[arg(long, default_value = "normal")]
    pub intensity: Intensity,

    #[arg(long, default_value = "")]
    pub comment: String,
}

#[derive(Args, Debug)]
pub struct ExerciseListArgs {
    /// First day to include (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,

    /// Only exercises of this sport type id.
    #[arg(long = "sport-type")]
    pub sport_type: Option<i32>,

    #[arg(long)]
    pub intensity: Option<Intensity>,

    /// Only exercises whose comment contains this text.
    #[arg(long)]
    pub comment: Option<String>,
}

// ---------------------------------------------------------------------------
// note
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct NoteArgs {
    #[command(subcommand)]
    pub command: NoteCommands,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a note. Prompts for the text when --text is omitted.
    Add(NoteInputArgs),
    /// Edit a note. Omitted fields keep their current value.
    Edit(NoteEditArgs),
    /// List notes in date order.
    List,
    /// Show one note.
    Show(NoteIdArgs),
    /// Remove a note.
    Remove(RemoveArgs),
}

#[derive(Args, Debug, Default)]
pub struct NoteInputArgs {
    /// Date (YYYY-MM-DD), default today.
    #[arg(long)]
    pub date: Option<String>,

    /// Time (HH:MM), default 12:00.
    #[arg(long)]
    pub time: Option<String>,

    /// Note text.
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct NoteEditArgs {
    /// Id of the note.
    pub id: i32,

    #[command(flatten)]
    pub input: NoteInputArgs,
}

#[derive(Args, Debug)]
pub struct NoteIdArgs {
    /// Id of the note.
    pub id: i32,
}

// ---------------------------------------------------------------------------
// speed-mode
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct SpeedModeArgs {
    /// Exercise ids.
    pub ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn datadir_requires_equals() {
        let cli = Cli::try_parse_from(["sportstracker", "--datadir=/tmp/st", "info"]).unwrap();
        assert_eq!(cli.global.datadir.as_deref(), Some("/tmp/st"));
        assert!(Cli::try_parse_from(["sportstracker", "--datadir", "/tmp/st", "info"]).is_err());
    }

    #[test]
    fn repeated_datadir_is_accepted() {
        let cli =
            Cli::try_parse_from(["sportstracker", "--datadir=a", "--datadir=b", "info"]).unwrap();
        assert_eq!(cli.global.datadir.as_deref(), Some("b"));
    }

    #[test]
    fn enum_arguments_parse() {
        let cli = Cli::try_parse_from([
            "sportstracker",
            "sport-type",
            "add",
            "Running",
            "--speed-mode",
            "PACE",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::SportType(SportTypeArgs {
                command: SportTypeCommands::Add(args),
            })) => assert_eq!(args.speed_mode, SpeedMode::Pace),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
