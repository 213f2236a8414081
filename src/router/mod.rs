//! Root-only facility state machine and final emission.
//!
//! The root of a logger tree owns exactly one [`Router`]. It holds the active [`Sink`]
//! for the current [`Facility`] plus a console sink for forced console copies, and
//! serializes every final write behind a single emission lock.

mod callback;
mod console;
mod file;
pub mod platform;
pub mod syslog;

pub use callback::{Callback, CallbackSink};
pub use console::ConsoleSink;
pub use file::FileSink;
pub use platform::{PlatformChannel, PlatformSink};
pub use syslog::{SyslogChannel, SyslogSink};

use crate::fmt::{self, TimePrecision, timestamp};
use crate::internal;
use crate::level::Level;
use parking_lot::Mutex;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Physical output target owned by the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facility {
    /// Logging disabled.
    None,
    #[default]
    Console,
    File,
    Syslog,
    /// Mobile-style platform log service.
    PlatformLog,
}

impl Facility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Console => "console",
            Self::File => "file",
            Self::Syslog => "syslog",
            Self::PlatformLog => "platformlog",
        }
    }
}

impl std::fmt::Display for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facility {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "console" => Ok(Self::Console),
            "file" => Ok(Self::File),
            "syslog" => Ok(Self::Syslog),
            "platformlog" | "platform" | "android" => Ok(Self::PlatformLog),
            _ => Err(crate::Error::InvalidFacility(s.to_string())),
        }
    }
}

/// Everything a sink needs to render one message.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    /// Message with all component prefixes applied, without timestamp or tag.
    pub message: &'a str,
    /// A console copy was requested on top of the facility.
    pub console: bool,
    /// Console copies should carry escape codes.
    pub colorize: bool,
    /// `<timestamp> [<LEVEL>] <message>`; absent when only syslog will see the record.
    pub line: Option<&'a str>,
}

impl Record<'_> {
    /// The stamped line, or the bare message when no line was built.
    #[must_use]
    pub fn line(&self) -> &str {
        self.line.unwrap_or(self.message)
    }
}

/// Final emission step for one facility.
///
/// `Send` because the root may be dropped, and thus the sink closed, on any thread.
pub trait Sink: Send {
    /// Writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying resource. The router reports these on the side
    /// channel; they never reach the code that logged the message.
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()>;
}

struct RouterState {
    facility: Facility,
    /// Sink for File, Syslog and PlatformLog; Console uses `console` directly.
    active: Option<Box<dyn Sink>>,
    console: ConsoleSink,
    precision: TimePrecision,
}

/// The root's facility state and emission lock.
pub struct Router {
    process_name: String,
    custom: Option<CallbackSink>,
    syslog: Arc<dyn SyslogChannel>,
    platform: Option<Arc<dyn PlatformChannel>>,
    state: Mutex<RouterState>,
}

impl Router {
    pub(crate) fn new(
        process_name: String,
        console: ConsoleSink,
        syslog: Arc<dyn SyslogChannel>,
        platform: Option<Arc<dyn PlatformChannel>>,
        custom: Option<CallbackSink>,
    ) -> Self {
        Self {
            process_name,
            custom,
            syslog,
            platform,
            state: Mutex::new(RouterState {
                facility: Facility::Console,
                active: None,
                console,
                precision: TimePrecision::default(),
            }),
        }
    }

    /// Identifier used to tag syslog and platform-log entries.
    #[must_use]
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    #[must_use]
    pub fn facility(&self) -> Facility {
        self.state.lock().facility
    }

    #[must_use]
    pub fn precision(&self) -> TimePrecision {
        self.state.lock().precision
    }

    pub fn set_precision(&self, precision: TimePrecision) {
        self.state.lock().precision = precision;
    }

    /// True when an injected callback replaces the built-in sinks.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Moves the state machine to `facility`, closing whatever the old one held open.
    ///
    /// A file that cannot be opened degrades the facility to `None` and is reported on
    /// the side channel. Returns the facility actually adopted.
    ///
    /// # Errors
    /// [`crate::Error::UnsupportedFacility`] for `PlatformLog` when no platform channel
    /// exists on this build. The previous facility stays active in that case.
    pub fn set_facility(
        &self,
        facility: Facility,
        path: Option<&Path>,
    ) -> Result<Facility, crate::Error> {
        let mut state = self.state.lock();
        if state.facility == facility {
            return Ok(facility);
        }

        if self.custom.is_some() {
            // The callback replaces emission, but an unusable log file still disables it.
            let adopted = match facility {
                Facility::File => open_log_file(path).map_or(Facility::None, |_| facility),
                _ => facility,
            };
            state.facility = adopted;
            return Ok(adopted);
        }

        let platform = match facility {
            Facility::PlatformLog => Some(
                self.platform
                    .clone()
                    .ok_or(crate::Error::UnsupportedFacility(facility))?,
            ),
            _ => None,
        };

        // Dropping the old sink closes its file or syslog connection.
        state.active = None;

        let (adopted, active): (Facility, Option<Box<dyn Sink>>) = match facility {
            Facility::Syslog => (
                facility,
                Some(Box::new(SyslogSink::open(
                    Arc::clone(&self.syslog),
                    &self.process_name,
                ))),
            ),
            Facility::File => match open_log_file(path) {
                Some(sink) => (facility, Some(Box::new(sink))),
                None => (Facility::None, None),
            },
            Facility::PlatformLog => (
                facility,
                platform.map(|channel| {
                    Box::new(PlatformSink::new(channel, &self.process_name)) as Box<dyn Sink>
                }),
            ),
            Facility::Console | Facility::None => (facility, None),
        };

        internal::debug("ROUTER", &format!("facility {} -> {adopted}", state.facility));
        state.facility = adopted;
        state.active = active;
        Ok(adopted)
    }

    /// Final emission, serialized across every thread and origin node.
    pub fn emit(&self, level: Level, message: &str, console: bool, colorize: bool) {
        let mut state = self.state.lock();
        if state.facility == Facility::None {
            return;
        }

        if let Some(custom) = &self.custom {
            custom.call(level, message, console);
            return;
        }

        let facility = state.facility;
        let line = (facility != Facility::Syslog || console)
            .then(|| fmt::stamp(&timestamp::now(state.precision), level, message));
        let record = Record {
            level,
            message,
            console,
            colorize,
            line: line.as_deref(),
        };

        let RouterState {
            active, console: console_sink, ..
        } = &mut *state;

        let result = match facility {
            Facility::Console => console_sink.emit(&record),
            Facility::File | Facility::Syslog | Facility::PlatformLog => active
                .as_mut()
                .map_or(Ok(()), |sink| sink.emit(&record)),
            Facility::None => Ok(()),
        };
        if let Err(e) = result {
            internal::error("ROUTER", &format!("{facility} write failed: {e}"));
        }

        if console
            && facility != Facility::Console
            && let Err(e) = console_sink.emit(&record)
        {
            internal::error("ROUTER", &format!("console write failed: {e}"));
        }
    }
}

/// Opens the log file for the File facility, reporting failures on the side channel.
fn open_log_file(path: Option<&Path>) -> Option<FileSink> {
    let Some(path) = path else {
        internal::error("ROUTER", "file facility requested without a path");
        return None;
    };
    FileSink::open(path)
        .map_err(|e| {
            internal::error(
                "ROUTER",
                &format!("unable to open log file for writing: {}: {e}", path.display()),
            );
        })
        .ok()
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("process_name", &self.process_name)
            .field("facility", &self.state.try_lock().map(|s| s.facility))
            .field("custom", &self.custom.is_some())
            .finish_non_exhaustive()
    }
}
