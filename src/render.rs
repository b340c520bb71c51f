//! Terminal rendering for daybook types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to daybook-core types using owo_colors.

use daybook_core::calendar::{Cell, MonthGrid};
use daybook_core::period::WEEKDAY_HEADERS;
use daybook_core::{CalendarRecord, NoteResult};
use owo_colors::OwoColorize;

/// Width of one grid column, borders excluded.
const CELL_WIDTH: usize = 5;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Cell {
    fn render(&self) -> String {
        let padded = format!("{:>width$} ", self.to_string(), width = CELL_WIDTH - 1);
        match self {
            Cell::Marked(_) => padded.yellow().bold().to_string(),
            Cell::Day(_) | Cell::Blank => padded,
        }
    }
}

fn border(left: &str, middle: &str, right: &str) -> String {
    let segment = "─".repeat(CELL_WIDTH);
    let segments = vec![segment; WEEKDAY_HEADERS.len()];
    format!("{}{}{}", left, segments.join(middle), right)
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = vec![border("┌", "┬", "┐")];

        let header: Vec<String> = WEEKDAY_HEADERS
            .iter()
            .map(|day| format!("{:^width$}", day, width = CELL_WIDTH).bold().to_string())
            .collect();
        lines.push(format!("│{}│", header.join("│")));
        lines.push(border("├", "┼", "┤"));

        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|cell| cell.render()).collect();
            lines.push(format!("│{}│", cells.join("│")));
        }

        lines.push(border("└", "┴", "┘"));
        lines.join("\n")
    }
}

impl Render for CalendarRecord {
    fn render(&self) -> String {
        let title = format!(
            "Calendar '{}' for {}, {}",
            self.name(),
            self.month_name(),
            self.year()
        );

        let grid = match self.render_grid() {
            Ok(grid) => grid.render(),
            Err(e) => e.to_string().red().to_string(),
        };

        format!(
            "{}\n{}\n{}",
            title.bold(),
            "'!' marks days that contain data".dimmed(),
            grid
        )
    }
}

/// Describe what is stored for a day.
pub fn render_notes(calendar: &str, day: u32, notes: &NoteResult) -> String {
    match notes {
        NoteResult::Found(_) => format!(
            "Data for day {} in calendar {}: {}",
            day,
            calendar,
            notes.joined().unwrap_or_default()
        ),
        NoteResult::EmptyMarker => format!("No data found for day {}", day).dimmed().to_string(),
        NoteResult::NoneStored => format!("No data stored for day {}", day).dimmed().to_string(),
    }
}

/// Numbered list of calendar names.
pub fn render_names(names: &[String]) -> String {
    if names.is_empty() {
        return "No calendars yet".dimmed().to_string();
    }

    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>3}  📅 {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}
