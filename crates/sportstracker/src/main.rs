//! `sportstracker` -- record and review exercises from the command line.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C exits cleanly, a second one forces exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();
    let ctx = RuntimeContext::from_global_args(&cli.global, std::env::args().skip(1));

    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                "sportstracker=debug,st_document=debug,st_storage=debug,st_config=debug",
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Some(Commands::Info) => commands::info::run(&ctx),
        Some(Commands::Options(args)) => commands::options_cmd::run(&ctx, &args),
        Some(Commands::SportType(args)) => commands::sport_type::run(&ctx, &args),
        Some(Commands::Exercise(args)) => commands::exercise::run(&ctx, &args),
        Some(Commands::Note(args)) => commands::note::run(&ctx, &args),
        Some(Commands::SpeedMode(args)) => commands::speed_mode::run(&ctx, &args),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
