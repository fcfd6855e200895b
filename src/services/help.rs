use crate::domain::models::{HelpEntry, TargetDoc};
use std::io::IsTerminal;

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Targets that carry a description, in table order.
pub fn documented(table: &[TargetDoc]) -> Vec<HelpEntry> {
    table
        .iter()
        .filter_map(|t| {
            t.description.map(|d| HelpEntry {
                name: t.name.to_string(),
                description: d.to_string(),
            })
        })
        .collect()
}

/// Width of the name column: longest listed name plus two spaces.
pub fn column_width(entries: &[HelpEntry]) -> usize {
    entries.iter().map(|e| e.name.len()).max().unwrap_or(0) + 2
}

pub fn format_row(entry: &HelpEntry, width: usize, color: bool) -> String {
    if color {
        format!("{CYAN}{:<width$}{RESET}{}", entry.name, entry.description)
    } else {
        format!("{:<width$}{}", entry.name, entry.description)
    }
}

/// Color only when stdout is a terminal and NO_COLOR is unset.
pub fn stdout_wants_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
