//! Logtree's own side-channel diagnostics.
//!
//! Failures inside the emission path (a log file that will not open, a sink write that
//! errors) cannot be reported through the tree without recursing into the component
//! that just failed, so they go straight to stderr instead.
//!
//! Debug chatter is off unless `LOGTREE_INTERNAL=debug`; the variable is read once.

use crate::level::Level;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Environment variable that raises the side channel's verbosity.
pub const ENV_VAR: &str = "LOGTREE_INTERNAL";

static THRESHOLD: OnceLock<Level> = OnceLock::new();

fn threshold() -> Level {
    *THRESHOLD.get_or_init(|| {
        std::env::var(ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::Warning)
    })
}

fn log(level: Level, scope: &str, msg: &str) {
    if !level.admitted_by(threshold()) {
        return;
    }
    // Nowhere left to report a failed stderr write.
    let _ = writeln!(io::stderr().lock(), "logtree: {level}: {scope}: {msg}");
}

/// Startup and teardown detail; hidden by default.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Degraded but continuing, e.g. a missing optional config file.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

/// A resource the logger needed is unavailable.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
