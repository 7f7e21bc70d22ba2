//! Output formatting helpers for the `sportstracker` CLI.
//!
//! Provides JSON output, table formatting, and the human-readable rows for
//! sport types, exercises and notes.

use serde::Serialize;
use std::io::{self, Write};

use st_core::format::FormatUtils;
use st_core::{Exercise, Note, SportType};
use st_ui::styles;

/// Date-time format used in tables and detail views.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
///
/// Column widths are computed from the data for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write!(handle, "{}", render_table(headers, rows));
}

/// Renders the table printed by [`output_table`].
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("  "));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(width) => format!("{:<width$}", cell, width = *width),
                None => cell.clone(),
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Table row for a sport type: id, name, speed mode, distance, color.
pub fn sport_type_row(sport_type: &SportType) -> Vec<String> {
    vec![
        sport_type.id.to_string(),
        sport_type.name.clone(),
        sport_type.speed_mode.to_string(),
        if sport_type.record_distance {
            "yes".to_string()
        } else {
            "no".to_string()
        },
        sport_type.color.clone().unwrap_or_default(),
    ]
}

/// Table row for an exercise, with distance and speed in the user's units
/// and the sport type's speed mode.
pub fn exercise_row(
    exercise: &Exercise,
    sport_type: Option<&SportType>,
    format_utils: &FormatUtils,
) -> Vec<String> {
    let speed_mode = sport_type
        .map(|st| st.speed_mode)
        .unwrap_or(format_utils.speed_mode());
    vec![
        exercise.id.to_string(),
        exercise.date_time.format(DATE_TIME_FORMAT).to_string(),
        sport_type
            .map(|st| st.name.clone())
            .unwrap_or_else(|| format!("#{}", exercise.sport_type_id)),
        format_utils.seconds_to_time_string(exercise.duration),
        exercise
            .distance
            .map(|d| format_utils.distance_to_string(d, 2))
            .unwrap_or_default(),
        exercise
            .avg_speed
            .map(|s| format_utils.speed_to_string(s, 1, speed_mode))
            .unwrap_or_default(),
        exercise.intensity.to_string(),
        exercise.comment.clone(),
    ]
}

/// Table row for a note: id, date and the first line of the text.
pub fn note_row(note: &Note) -> Vec<String> {
    vec![
        note.id.to_string(),
        note.date_time.format(DATE_TIME_FORMAT).to_string(),
        note.summary(60),
    ]
}

/// Multi-line view of a note.
pub fn format_note_detail(note: &Note) -> String {
    format!(
        "{} {}\n{}\n{}",
        styles::render_bold(&format!("Note {}", note.id)),
        styles::render_muted(&note.date_time.format(DATE_TIME_FORMAT).to_string()),
        styles::render_separator(),
        note.text
    )
}
