//! Formatter: timestamps, severity labels, console colors and color-capability detection.

pub mod ansi;
mod tag;
pub mod term;
pub mod timestamp;

pub use ansi::{Attribute, Color, Style};
pub use tag::{colorize, level_attributes, stamp, tag};
pub use term::color_possible;
pub use timestamp::TimePrecision;
