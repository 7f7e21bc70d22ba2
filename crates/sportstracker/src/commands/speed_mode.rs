//! `sportstracker speed-mode` -- speed mode for displaying a set of exercises.

use anyhow::{Context, Result};

use crate::cli::SpeedModeArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `sportstracker speed-mode` command.
pub fn run(ctx: &RuntimeContext, args: &SpeedModeArgs) -> Result<()> {
    let document = ctx.open_document()?;
    let speed_mode = document
        .speed_mode_for_exercises(Some(&args.ids))
        .context("failed to determine speed mode")?;

    if ctx.json {
        output_json(&serde_json::json!({
            "exercise_ids": args.ids,
            "speed_mode": speed_mode,
        }));
    } else {
        println!("{}", st_ui::styles::render_speed_mode(speed_mode));
    }
    Ok(())
}
