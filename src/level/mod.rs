//! Severity levels that gate which messages survive the trip from a leaf node to the root.
//!
//! Ordering is most-urgent-first: `Critical` has the lowest ordinal and `Debug` the highest.
//! A node admits a message when `message_level <= threshold`.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so a node can compare a message's level against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// The process cannot continue in a sane state.
    Critical = 0,
    /// An operation failed.
    Error = 1,
    /// Something unexpected that did not stop the operation.
    Warning = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Development-time detail, suppressed unless every node on the path admits it.
    Debug = 4,
}

impl Level {
    /// Canonical uppercase name, as rendered inside the `[LEVEL]` tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// All levels, most urgent first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
        ]
    }

    /// True when a message at `self` passes a node whose threshold is `threshold`.
    #[must_use]
    pub fn admitted_by(self, threshold: Self) -> bool {
        self <= threshold
    }

    /// syslog(3) priority: `LOG_CRIT` through `LOG_DEBUG`.
    #[must_use]
    pub const fn syslog_priority(self) -> i32 {
        match self {
            Self::Critical => 2,
            Self::Error => 3,
            Self::Warning => 4,
            Self::Info => 6,
            Self::Debug => 7,
        }
    }

    /// Android log priority: `ANDROID_LOG_DEBUG` through `ANDROID_LOG_FATAL`.
    #[must_use]
    pub const fn platform_priority(self) -> i32 {
        match self {
            Self::Debug => 3,
            Self::Info => 4,
            Self::Warning => 5,
            Self::Error => 6,
            Self::Critical => 7,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Critical,
            1 => Self::Error,
            2 => Self::Warning,
            4 => Self::Debug,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell "unknown level" apart from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input, verbatim.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts exactly the five canonical names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CRITICAL" => Ok(Self::Critical),
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
