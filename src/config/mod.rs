//! TOML configuration for a root logger.
//!
//! Every field has a default, so a missing or empty file still yields a working
//! console logger.

mod structs;

pub use structs::{GeneralConfig, OutputConfig};

use crate::fmt::TimePrecision;
use crate::internal;
use crate::router::Facility;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_DIR: &str = "logtree";
const CONFIG_FILE: &str = "logtree.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads `<config dir>/logtree/logtree.toml`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or
    /// TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::default_path()?;
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        internal::debug("CONFIG", &format!("loaded {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Where [`Self::load`] looks.
    ///
    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when no home directory is known.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", CONFIG_DIR)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// [`crate::Error::InvalidFacility`] for an unrecognized facility name.
    pub fn facility(&self) -> Result<Facility, crate::Error> {
        self.output.facility.parse()
    }

    /// Log file path with `~` and environment variables expanded. Unresolvable
    /// variables leave the path as written.
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.output.path.as_deref().map(|raw| {
            shellexpand::full(raw).map_or_else(
                |_| PathBuf::from(shellexpand::tilde(raw).into_owned()),
                |expanded| PathBuf::from(expanded.into_owned()),
            )
        })
    }

    /// Unknown names fall back to microseconds.
    #[must_use]
    pub fn precision(&self) -> TimePrecision {
        self.output.precision.parse().unwrap_or_else(|e: String| {
            internal::warn("CONFIG", &e);
            TimePrecision::default()
        })
    }

    #[must_use]
    pub const fn contention_timeout(&self) -> Duration {
        Duration::from_millis(self.output.contention_timeout_ms)
    }
}
