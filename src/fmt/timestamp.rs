//! Local-time timestamps with configurable sub-second precision.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::str::FromStr;

/// Sub-second digits appended after the seconds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimePrecision {
    /// Three digits of true milliseconds (microseconds divided by 1 000).
    Milliseconds,
    /// Six digits.
    #[default]
    Microseconds,
}

impl TimePrecision {
    /// Number of fractional digits rendered.
    #[must_use]
    pub const fn digits(self) -> usize {
        match self {
            Self::Milliseconds => 3,
            Self::Microseconds => 6,
        }
    }

    /// Range of the fractional field: 1 000 for milliseconds, 1 000 000 for microseconds.
    #[must_use]
    pub const fn modulo(self) -> u32 {
        match self {
            Self::Milliseconds => 1_000,
            Self::Microseconds => 1_000_000,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
        }
    }
}

impl fmt::Display for TimePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePrecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "milliseconds" | "millis" | "ms" => Ok(Self::Milliseconds),
            "microseconds" | "micros" | "us" => Ok(Self::Microseconds),
            _ => Err(format!("unknown time precision: '{s}'")),
        }
    }
}

/// Current local time as `YYYY-MM-DDTHH:MM:SS.ffffff` (or `.fff`).
#[must_use]
pub fn now(precision: TimePrecision) -> String {
    format(&Local::now(), precision)
}

/// Renders an arbitrary instant; split out so tests can pin the clock.
#[must_use]
pub fn format<Tz: TimeZone>(instant: &DateTime<Tz>, precision: TimePrecision) -> String
where
    Tz::Offset: fmt::Display,
{
    // Leap seconds surface as micros >= 1_000_000; the modulo folds them back.
    let micros = instant.timestamp_subsec_micros() % TimePrecision::Microseconds.modulo();
    let fraction = match precision {
        TimePrecision::Milliseconds => micros / 1_000,
        TimePrecision::Microseconds => micros,
    } % precision.modulo();

    format!(
        "{}.{:0width$}",
        instant.format("%Y-%m-%dT%H:%M:%S"),
        fraction,
        width = precision.digits()
    )
}
