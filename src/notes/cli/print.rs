use chrono::{DateTime, Utc};
use colored::*;
use http::StatusCode;
use notes::api::ApiResponse;
use notes::config::OutputFormat;
use notes::model::Note;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 36;
const TIME_WIDTH: usize = 14;

pub fn print_response<W: Write>(
    out: &mut W,
    response: &ApiResponse,
    format: OutputFormat,
) -> io::Result<()> {
    writeln!(out, "{}", status_line(response.status))?;

    let Some(body) = &response.body else {
        return Ok(());
    };

    if format == OutputFormat::Table && body.is_array() {
        if let Ok(notes) = serde_json::from_value::<Vec<Note>>(body.clone()) {
            return print_notes(out, &notes);
        }
    }

    let pretty = serde_json::to_string_pretty(body).map_err(io::Error::other)?;
    writeln!(out, "{}", pretty)
}

fn status_line(status: StatusCode) -> ColoredString {
    let text = status.to_string();
    match status.as_u16() {
        200..=299 => text.green(),
        400..=499 => text.yellow(),
        _ => text.red(),
    }
}

pub fn print_notes<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(out, "No notes found.");
    }

    for note in notes {
        let content_preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = format!("{} {}", note.title, content_preview);

        let fixed_width = ID_WIDTH + 2 + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        writeln!(
            out,
            "{}  {}{}  {}",
            note.id.dimmed(),
            title_display,
            " ".repeat(padding),
            format_time_ago(note.created_at).dimmed()
        )?;
    }
    Ok(())
}

const ELLIPSIS: char = '…';

/// Cuts `s` to at most `max_width` terminal columns, ending in an ellipsis when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut used = 0;
    let mut result: String = s
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    result.push(ELLIPSIS);
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
