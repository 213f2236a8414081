//! Severity labels and the final `<timestamp> [<LEVEL>] <message>` line shape.

use super::ansi::{self, Attribute, Color, Style};
use crate::level::Level;

/// Bracketed uppercase label, e.g. `[WARNING]`.
#[must_use]
pub fn tag(level: Level) -> String {
    format!("[{}]", level.as_str())
}

/// Builds the line written to files and the console (without trailing newline).
#[must_use]
pub fn stamp(timestamp: &str, level: Level, message: &str) -> String {
    let label = level.as_str();
    let mut line = String::with_capacity(timestamp.len() + label.len() + message.len() + 4);
    line.push_str(timestamp);
    line.push_str(" [");
    line.push_str(label);
    line.push_str("] ");
    line.push_str(message);
    line
}

/// Console decoration for each severity.
#[must_use]
pub const fn level_attributes(level: Level) -> &'static [Attribute] {
    match level {
        Level::Critical => &[Attribute::On(Style::Bold), Attribute::Foreground(Color::Red)],
        Level::Error => &[
            Attribute::On(Style::Bold),
            Attribute::Foreground(Color::Magenta),
        ],
        Level::Warning => &[
            Attribute::On(Style::Bold),
            Attribute::Foreground(Color::Yellow),
        ],
        Level::Debug => &[Attribute::Foreground(Color::Green)],
        Level::Info => &[Attribute::Foreground(Color::Default)],
    }
}

/// Wraps a stamped line in the severity's escape tokens.
#[must_use]
pub fn colorize(level: Level, line: &str) -> String {
    ansi::paint(line, level_attributes(level))
}
