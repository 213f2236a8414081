//! Escape-code table for console decoration.
//!
//! A pure mapping from a semantic attribute to an opaque SGR token. The emitter only
//! concatenates these tokens around a line; nothing in the crate parses them back.

/// The eight standard terminal colors plus the terminal's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl Color {
    const fn offset(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
            Self::Default => 9,
        }
    }
}

/// Text styles that can be switched on and off independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Inverse,
    Invisible,
    Strikethrough,
}

/// Anything the console emitter may ask the table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Foreground(Color),
    Background(Color),
    On(Style),
    Off(Style),
    /// Clears every active color and style.
    Reset,
}

const FOREGROUND: [&str; 10] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
    "\x1b[37m", "", "\x1b[39m",
];

const BACKGROUND: [&str; 10] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m",
    "\x1b[47m", "", "\x1b[49m",
];

/// Terminates any active SGR styling.
pub const RESET: &str = "\x1b[0m";

/// Looks up the escape token for `attribute`.
#[must_use]
pub const fn code(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Foreground(color) => FOREGROUND[color.offset() as usize],
        Attribute::Background(color) => BACKGROUND[color.offset() as usize],
        Attribute::On(style) => match style {
            Style::Bold => "\x1b[1m",
            Style::Dim => "\x1b[2m",
            Style::Italic => "\x1b[3m",
            Style::Underline => "\x1b[4m",
            Style::Blink => "\x1b[5m",
            Style::Inverse => "\x1b[7m",
            Style::Invisible => "\x1b[8m",
            Style::Strikethrough => "\x1b[9m",
        },
        // 22 clears both bold and dim; there is no separate "bold off" code.
        Attribute::Off(style) => match style {
            Style::Bold | Style::Dim => "\x1b[22m",
            Style::Italic => "\x1b[23m",
            Style::Underline => "\x1b[24m",
            Style::Blink => "\x1b[25m",
            Style::Inverse => "\x1b[27m",
            Style::Invisible => "\x1b[28m",
            Style::Strikethrough => "\x1b[29m",
        },
        Attribute::Reset => RESET,
    }
}

/// Wraps `text` in the given attributes followed by a full reset.
#[must_use]
pub fn paint(text: &str, attributes: &[Attribute]) -> String {
    let mut out = String::with_capacity(text.len() + attributes.len() * 5 + RESET.len());
    for attribute in attributes {
        out.push_str(code(*attribute));
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}
