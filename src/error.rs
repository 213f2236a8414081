//! Unified error type for all logtree operations.
//!
//! Logging itself never fails back into the caller; these errors surface only from
//! configuration and facility changes.

use crate::gate::Stream;
use crate::router::Facility;

/// Error type for logtree operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid facility string.
    InvalidFacility(String),
    /// The facility has no backing channel on this build.
    UnsupportedFacility(Facility),
    /// The calling thread does not hold the stream's buffer.
    NotOwner(Stream),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidFacility(name) => write!(f, "invalid log facility: {name}"),
            Self::UnsupportedFacility(facility) => {
                write!(f, "log facility {facility} is not supported on this platform")
            }
            Self::NotOwner(stream) => {
                write!(f, "calling thread does not own the {stream} buffer")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
