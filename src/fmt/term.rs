//! Color-capability detection for the console facility.

use std::io::{self, IsTerminal};

/// Environment variable naming the terminal type.
pub const TERM_VAR: &str = "TERM";

/// True only if stdout is an interactive terminal and `TERM` is set to something other
/// than `dumb` (case-insensitive).
#[must_use]
pub fn color_possible() -> bool {
    capable(io::stdout().is_terminal(), std::env::var(TERM_VAR).ok().as_deref())
}

/// The decision behind [`color_possible`], with its inputs made explicit.
#[must_use]
pub fn capable(is_tty: bool, term: Option<&str>) -> bool {
    is_tty && term.is_some_and(|t| !t.eq_ignore_ascii_case("dumb"))
}
