//! `sportstracker note` -- add, edit, list, show and remove notes.
//!
//! Adding and editing go through [`NoteInput`] validation. A rejected input
//! is reported through the UI context with the message for the offending
//! field and nothing is stored.

use anyhow::{Result, bail};

use st_core::validation::{NoteField, NoteInput, note_keys, parse_date, parse_hour_minute};
use st_document::{DocumentError, StDocument};
use st_ui::{MessageKind, UiContext};

use crate::cli::{NoteArgs, NoteCommands, NoteEditArgs, NoteIdArgs, NoteInputArgs, RemoveArgs};
use crate::context::RuntimeContext;
use crate::output::{format_note_detail, note_row, output_json, output_table};

/// Resource key of the text prompt label.
const TEXT_LABEL: &str = "st.dlg.note.text";

/// Execute the `sportstracker note` command.
pub fn run(ctx: &RuntimeContext, args: &NoteArgs) -> Result<()> {
    match &args.command {
        NoteCommands::Add(input_args) => run_add(ctx, input_args),
        NoteCommands::Edit(edit_args) => run_edit(ctx, edit_args),
        NoteCommands::List => run_list(ctx),
        NoteCommands::Show(show_args) => run_show(ctx, show_args),
        NoteCommands::Remove(remove_args) => run_remove(ctx, remove_args),
    }
}

fn run_add(ctx: &RuntimeContext, args: &NoteInputArgs) -> Result<()> {
    let mut document = ctx.open_document()?;
    let mut ui = ctx.ui(&document);

    let id = document.notes().new_id();
    let mut input = NoteInput::default();
    apply_field_args(&mut input, args, &mut ui)?;
    input.text = match args.text {
        Some(ref text) => text.clone(),
        None => ui
            .show_text_input(document.note_title_key(id), TEXT_LABEL, None)?
            .unwrap_or_default(),
    };

    save(ctx, &mut document, &mut ui, id, &input, "Added")
}

fn run_edit(ctx: &RuntimeContext, args: &NoteEditArgs) -> Result<()> {
    let mut document = ctx.open_document()?;
    let mut ui = ctx.ui(&document);

    let Some(note) = document.notes().get_by_id(args.id) else {
        bail!(DocumentError::NoteNotFound(args.id));
    };
    let mut input = NoteInput::from_note(note);
    apply_field_args(&mut input, &args.input, &mut ui)?;
    if let Some(ref text) = args.input.text {
        input.text = text.clone();
    } else if let Some(text) = ui.show_text_input(
        document.note_title_key(args.id),
        TEXT_LABEL,
        Some(input.text.as_str()),
    )? {
        input.text = text;
    }

    save(ctx, &mut document, &mut ui, args.id, &input, "Updated")
}

/// Copies the date and time arguments into `input`.
///
/// An unparseable date clears the date so validation reports it. A time
/// that is not `HH:MM` is reported right away.
fn apply_field_args(
    input: &mut NoteInput,
    args: &NoteInputArgs,
    ui: &mut impl UiContext,
) -> Result<()> {
    if let Some(ref raw) = args.date {
        input.date = parse_date(raw);
    }
    if let Some(ref raw) = args.time {
        match parse_hour_minute(raw) {
            Some((hour, minute)) => {
                input.hour = hour;
                input.minute = minute;
            }
            None => {
                ui.show_message(
                    MessageKind::Error,
                    "common.error",
                    note_keys::ERROR_TIME,
                    &[raw.as_str()],
                )?;
                bail!("note not saved: invalid time '{}'", raw);
            }
        }
    }
    Ok(())
}

fn save(
    ctx: &RuntimeContext,
    document: &mut StDocument,
    ui: &mut impl UiContext,
    id: i32,
    input: &NoteInput,
    verb: &str,
) -> Result<()> {
    let note = match document.save_note_input(id, input) {
        Ok(note) => note.clone(),
        Err(DocumentError::NoteInput(e)) => {
            let time = format!("{:02}:{:02}", input.hour, input.minute);
            ui.show_message(
                MessageKind::Error,
                "common.error",
                e.message_key(),
                &[time.as_str()],
            )?;
            bail!("note not saved: {} (field: {})", e, field_name(e.field()));
        }
        Err(e) => return Err(e.into()),
    };
    ctx.save_document(document)?;

    if ctx.json {
        output_json(&note);
    } else if !ctx.quiet {
        println!("{} note {}", verb, note.id);
    }
    Ok(())
}

fn field_name(field: NoteField) -> &'static str {
    match field {
        NoteField::Date => "date",
        NoteField::Time => "time",
        NoteField::Text => "text",
    }
}

fn run_list(ctx: &RuntimeContext) -> Result<()> {
    let document = ctx.open_document()?;

    if ctx.json {
        output_json(&document.notes().as_slice());
        return Ok(());
    }
    if document.notes().is_empty() {
        if !ctx.quiet {
            println!("No notes");
        }
        return Ok(());
    }
    let rows: Vec<Vec<String>> = document.notes().iter().map(note_row).collect();
    output_table(&["ID", "DATE", "TEXT"], &rows);
    Ok(())
}

fn run_show(ctx: &RuntimeContext, args: &NoteIdArgs) -> Result<()> {
    let document = ctx.open_document()?;
    let note = document
        .notes()
        .get_by_id(args.id)
        .ok_or(DocumentError::NoteNotFound(args.id))?;

    if ctx.json {
        output_json(note);
    } else {
        println!("{}", format_note_detail(note));
    }
    Ok(())
}

fn run_remove(ctx: &RuntimeContext, args: &RemoveArgs) -> Result<()> {
    let mut document = ctx.open_document()?;
    let mut ui = ctx.ui(&document);
    if !document.notes().contains(args.id) {
        bail!(DocumentError::NoteNotFound(args.id));
    }

    let id = args.id.to_string();
    if !args.force
        && !ui.show_confirm(
            "common.confirm",
            "st.view.note.delete.confirm",
            &[id.as_str()],
        )?
    {
        if !ctx.quiet {
            ui.show_message(MessageKind::Info, "common.info", "st.main.cancelled", &[])?;
        }
        return Ok(());
    }

    document.remove_note(args.id)?;
    ctx.save_document(&mut document)?;

    if ctx.json {
        output_json(&serde_json::json!({ "removed": args.id }));
    } else if !ctx.quiet {
        ui.show_message(
            MessageKind::Info,
            "common.info",
            "st.view.note.deleted",
            &[id.as_str()],
        )?;
    }
    Ok(())
}
