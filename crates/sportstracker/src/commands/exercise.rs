//! `sportstracker exercise` -- add, list and remove exercises.

use anyhow::{Context, Result, bail};
use chrono::NaiveTime;

use st_core::Exercise;
use st_core::validation::{DEFAULT_HOUR, parse_date, parse_hour_minute};
use st_document::{DocumentError, ExerciseFilter};
use st_ui::{MessageKind, UiContext};

use crate::cli::{ExerciseAddArgs, ExerciseArgs, ExerciseCommands, ExerciseListArgs, RemoveArgs};
use crate::context::RuntimeContext;
use crate::output::{exercise_row, output_json, output_table};

/// Execute the `sportstracker exercise` command.
pub fn run(ctx: &RuntimeContext, args: &ExerciseArgs) -> Result<()> {
    match &args.command {
        ExerciseCommands::Add(add_args) => run_add(ctx, add_args),
        ExerciseCommands::List(list_args) => run_list(ctx, list_args),
        ExerciseCommands::Remove(remove_args) => run_remove(ctx, remove_args),
    }
}

fn run_add(ctx: &RuntimeContext, args: &ExerciseAddArgs) -> Result<()> {
    let date = parse_date(&args.date)
        .with_context(|| format!("invalid date '{}': expected YYYY-MM-DD", args.date))?;
    let time = match args.time {
        Some(ref raw) => parse_hour_minute(raw)
            .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .with_context(|| format!("invalid time '{}': expected HH:MM", raw))?,
        None => NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0).context("invalid default time")?,
    };
    let duration = parse_duration(&args.duration)
        .with_context(|| format!("invalid duration '{}'", args.duration))?;
    if args.distance.is_some_and(|d| d < 0.0) {
        bail!("distance must not be negative");
    }

    let mut document = ctx.open_document()?;
    let sport_type = document
        .sport_types()
        .get_by_id(args.sport_type)
        .ok_or(DocumentError::SportTypeNotFound(args.sport_type))?;
    if args.distance.is_some() && !sport_type.record_distance {
        bail!("sport type '{}' does not record a distance", sport_type.name);
    }

    let mut exercise = Exercise::new(
        document.exercises().new_id(),
        date.and_time(time),
        args.sport_type,
    );
    exercise.duration = duration;
    exercise.distance = args.distance;
    exercise.intensity = args.intensity;
    exercise.comment = args.comment.trim().to_string();
    exercise.avg_speed = match args.avg_speed {
        Some(speed) => Some(speed),
        None if document.options().default_auto_calculation => exercise.calculate_avg_speed(),
        None => None,
    };

    document.set_exercise(exercise.clone());
    ctx.save_document(&mut document)?;

    if ctx.json {
        output_json(&exercise);
    } else if !ctx.quiet {
        println!(
            "Added exercise {} on {}",
            exercise.id,
            exercise.date_time.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn run_list(ctx: &RuntimeContext, args: &ExerciseListArgs) -> Result<()> {
    let filter = ExerciseFilter {
        date_start: optional_date(args.from.as_deref())?,
        date_end: optional_date(args.to.as_deref())?,
        sport_type_id: args.sport_type,
        intensity: args.intensity,
        comment_contains: args.comment.clone(),
    };

    let document = ctx.open_document()?;
    let exercises = document.filter_exercises(&filter);

    if ctx.json {
        output_json(&exercises);
        return Ok(());
    }
    if exercises.is_empty() {
        if !ctx.quiet {
            println!("No exercises found");
        }
        return Ok(());
    }

    let ui = ctx.ui(&document);
    let rows: Vec<Vec<String>> = exercises
        .iter()
        .map(|e| {
            exercise_row(
                e,
                document.sport_types().get_by_id(e.sport_type_id),
                ui.format_utils(),
            )
        })
        .collect();
    output_table(
        &[
            "ID",
            "DATE",
            "SPORT TYPE",
            "DURATION",
            "DISTANCE",
            "AVG SPEED",
            "INTENSITY",
            "COMMENT",
        ],
        &rows,
    );
    Ok(())
}

fn run_remove(ctx: &RuntimeContext, args: &RemoveArgs) -> Result<()> {
    let mut document = ctx.open_document()?;
    let mut ui = ctx.ui(&document);
    if !document.exercises().contains(args.id) {
        bail!(DocumentError::ExerciseNotFound(args.id));
    }

    let id = args.id.to_string();
    if !args.force
        && !ui.show_confirm(
            "common.confirm",
            "st.view.exercise.delete.confirm",
            &[id.as_str()],
        )?
    {
        if !ctx.quiet {
            ui.show_message(MessageKind::Info, "common.info", "st.main.cancelled", &[])?;
        }
        return Ok(());
    }

    document.remove_exercise(args.id)?;
    ctx.save_document(&mut document)?;

    if ctx.json {
        output_json(&serde_json::json!({ "removed": args.id }));
    } else if !ctx.quiet {
        ui.show_message(
            MessageKind::Info,
            "common.info",
            "st.view.exercise.deleted",
            &[id.as_str()],
        )?;
    }
    Ok(())
}

fn optional_date(raw: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    raw.map(|s| {
        parse_date(s).with_context(|| format!("invalid date '{}': expected YYYY-MM-DD", s))
    })
    .transpose()
}

/// Parses a duration given as seconds, `MM:SS` or `H:MM:SS`.
///
/// Values that do not fit into `u32` seconds are rejected.
fn parse_duration(s: &str) -> Option<u32> {
    let parts: Vec<u32> = s
        .trim()
        .split(':')
        .map(|p| p.parse().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [seconds] => Some(*seconds),
        [m, s] if *s < 60 => m.checked_mul(60)?.checked_add(*s),
        [h, m, s] if *m < 60 && *s < 60 => h
            .checked_mul(3600)?
            .checked_add(m * 60)?
            .checked_add(*s),
        _ => None,
    }
}
