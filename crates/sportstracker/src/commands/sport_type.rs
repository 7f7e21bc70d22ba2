//! `sportstracker sport-type` -- add, list and remove sport types.

use anyhow::{Result, bail};

use st_core::SportType;
use st_document::DocumentError;
use st_ui::{MessageKind, UiContext};

use crate::cli::{RemoveArgs, SportTypeAddArgs, SportTypeArgs, SportTypeCommands};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table, sport_type_row};

/// Execute the `sportstracker sport-type` command.
pub fn run(ctx: &RuntimeContext, args: &SportTypeArgs) -> Result<()> {
    match &args.command {
        SportTypeCommands::Add(add_args) => run_add(ctx, add_args),
        SportTypeCommands::List => run_list(ctx),
        SportTypeCommands::Remove(remove_args) => run_remove(ctx, remove_args),
    }
}

fn run_add(ctx: &RuntimeContext, args: &SportTypeAddArgs) -> Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        bail!("sport type name must not be empty");
    }
    if let Some(ref color) = args.color {
        if !is_hex_color(color) {
            bail!("invalid color '{}': expected #rrggbb", color);
        }
    }

    let mut document = ctx.open_document()?;
    if document
        .sport_types()
        .iter()
        .any(|st| st.name.eq_ignore_ascii_case(name))
    {
        bail!("a sport type named '{}' already exists", name);
    }

    let mut sport_type = SportType::new(document.sport_types().new_id())
        .with_name(name)
        .with_speed_mode(args.speed_mode);
    sport_type.record_distance = !args.no_distance;
    sport_type.color = args.color.clone();

    document.set_sport_type(sport_type.clone());
    ctx.save_document(&mut document)?;

    if ctx.json {
        output_json(&sport_type);
    } else if !ctx.quiet {
        println!("Added sport type {}: {}", sport_type.id, sport_type.name);
    }
    Ok(())
}

fn run_list(ctx: &RuntimeContext) -> Result<()> {
    let document = ctx.open_document()?;

    if ctx.json {
        output_json(&document.sport_types().as_slice());
        return Ok(());
    }
    if document.sport_types().is_empty() {
        if !ctx.quiet {
            println!("No sport types");
        }
        return Ok(());
    }
    let rows: Vec<Vec<String>> = document.sport_types().iter().map(sport_type_row).collect();
    output_table(&["ID", "NAME", "SPEED MODE", "DISTANCE", "COLOR"], &rows);
    Ok(())
}

fn run_remove(ctx: &RuntimeContext, args: &RemoveArgs) -> Result<()> {
    let mut document = ctx.open_document()?;
    let mut ui = ctx.ui(&document);

    let Some(name) = document
        .sport_types()
        .get_by_id(args.id)
        .map(|st| st.name.clone())
    else {
        bail!(DocumentError::SportTypeNotFound(args.id));
    };

    if !args.force
        && !ui.show_confirm(
            "common.confirm",
            "st.dlg.sporttype.delete.confirm",
            &[name.as_str()],
        )?
    {
        if !ctx.quiet {
            ui.show_message(MessageKind::Info, "common.info", "st.main.cancelled", &[])?;
        }
        return Ok(());
    }

    match document.remove_sport_type(args.id) {
        Ok(_) => {}
        Err(DocumentError::SportTypeInUse { count, .. }) => {
            ui.show_message(
                MessageKind::Error,
                "common.error",
                "st.dlg.sporttype.error.in_use",
                &[name.as_str(), count.to_string().as_str()],
            )?;
            bail!("sport type {} is still in use", args.id);
        }
        Err(e) => return Err(e.into()),
    }
    ctx.save_document(&mut document)?;

    if ctx.json {
        output_json(&serde_json::json!({ "removed": args.id }));
    } else if !ctx.quiet {
        ui.show_message(
            MessageKind::Info,
            "common.info",
            "st.dlg.sporttype.deleted",
            &[name.as_str()],
        )?;
    }
    Ok(())
}

/// Accepts `#rrggbb`.
fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
