//! Serde schema for the config file.

use serde::Deserialize;

/// Identity and filtering, independent of where output goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Syslog ident and platform-log tag.
    pub process_name: String,
    /// Root component name; empty means no prefix.
    pub component: String,
    /// Root threshold name.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            process_name: String::new(),
            component: String::new(),
            level: "INFO".to_string(),
        }
    }
}

/// Facility selection and console behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `none`, `console`, `file`, `syslog` or `platformlog`.
    pub facility: String,
    /// Log file for the `file` facility; `~` and `$VARS` are expanded.
    pub path: Option<String>,
    /// `milliseconds` or `microseconds`.
    pub precision: String,
    /// Colored console output, if the terminal supports it.
    pub colors: bool,
    /// Copy every message to the console as well.
    pub console: bool,
    pub contention_timeout_ms: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            facility: "console".to_string(),
            path: None,
            precision: "microseconds".to_string(),
            colors: true,
            console: false,
            contention_timeout_ms: 1_000,
        }
    }
}
