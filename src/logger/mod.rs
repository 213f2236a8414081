//! Logger nodes: filtering and leaf-to-root forwarding.
//!
//! Every node owns a threshold, an optional component name and six severity buffers.
//! A message is filtered by each node's own threshold on its way up, picks up the node's
//! `[component]` prefix, and is handed to the parent. Only the root, which owns the
//! [`Router`], emits.
//!
//! Nodes are always held in an [`Arc`]; a child keeps its parent alive and the parent
//! never learns about its children.

mod builder;
mod from_config;
mod message;

pub use builder::LoggerBuilder;
pub use message::Message;

use crate::fmt::TimePrecision;
use crate::gate::{Admission, SeverityBuffer, Stream};
use crate::internal;
use crate::level::Level;
use crate::router::{Facility, Router};
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::thread::ThreadId;

pub(crate) enum Link {
    Root(Router),
    Child(Arc<Logger>),
}

/// One vertex of the logging tree.
pub struct Logger {
    component: String,
    link: Link,
    threshold: AtomicU8,
    colorize: AtomicBool,
    color_capable: bool,
    output_to_console: bool,
    buffers: [SeverityBuffer; 6],
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Root node logging to the console, tagged with `process_name` for syslog.
    #[must_use]
    pub fn root(process_name: impl Into<String>) -> Arc<Self> {
        LoggerBuilder::new().process_name(process_name).build()
    }

    /// Child node named `component` under `self`.
    #[must_use]
    pub fn child(self: &Arc<Self>, component: impl Into<String>) -> Arc<Self> {
        LoggerBuilder::new()
            .parent(Arc::clone(self))
            .component(component)
            .build()
    }

    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Self>> {
        match &self.link {
            Link::Root(_) => None,
            Link::Child(parent) => Some(parent),
        }
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self.link, Link::Root(_))
    }

    /// Whether this node forces a console copy of everything passing through it.
    #[must_use]
    pub const fn outputs_to_console(&self) -> bool {
        self.output_to_console
    }

    fn router(&self) -> &Router {
        let mut node = self;
        loop {
            match &node.link {
                Link::Root(router) => return router,
                Link::Child(parent) => node = parent,
            }
        }
    }

    /// Filters `message` by this node's threshold, prefixes the component name and
    /// forwards it toward the root.
    pub fn log(&self, level: Level, message: &str) {
        self.log_console(level, message, false);
    }

    /// [`Self::log`] with an explicit request for a console copy at the root.
    pub fn log_console(&self, level: Level, message: &str, console: bool) {
        let console = console || self.output_to_console;

        if !level.admitted_by(self.level()) {
            return;
        }

        let message = if self.component.is_empty() {
            Cow::Borrowed(message)
        } else {
            Cow::Owned(format!("[{}] {message}", self.component))
        };

        match &self.link {
            Link::Child(parent) => parent.log_console(level, &message, console),
            Link::Root(router) => router.emit(level, &message, console, self.is_colorized()),
        }
    }

    /// Message builder for `stream`; the line is emitted on [`Message::finish`] or drop.
    #[must_use]
    pub fn stream(&self, stream: Stream) -> Message<'_> {
        Message::new(self, stream)
    }

    #[must_use]
    pub fn critical(&self) -> Message<'_> {
        self.stream(Stream::Critical)
    }

    #[must_use]
    pub fn error(&self) -> Message<'_> {
        self.stream(Stream::Error)
    }

    #[must_use]
    pub fn warning(&self) -> Message<'_> {
        self.stream(Stream::Warning)
    }

    #[must_use]
    pub fn info(&self) -> Message<'_> {
        self.stream(Stream::Info)
    }

    #[must_use]
    pub fn debug(&self) -> Message<'_> {
        self.stream(Stream::Debug)
    }

    /// Info-level builder whose line is always copied to the console.
    #[must_use]
    pub fn console(&self) -> Message<'_> {
        self.stream(Stream::Console)
    }

    /// The gate behind `stream`.
    #[must_use]
    pub fn buffer(&self, stream: Stream) -> &SeverityBuffer {
        &self.buffers[stream.slot()]
    }

    /// Claims `stream`'s buffer for the calling thread (waiting if another thread holds
    /// it) and appends `text`. The buffer stays claimed until [`Self::flush`].
    pub fn append(&self, stream: Stream, text: &str) -> Admission {
        self.buffer(stream)
            .acquire_and_append(text, |previous| self.report_abandoned(stream, previous))
    }

    /// Logs everything the calling thread appended to `stream` as one line and
    /// releases the buffer.
    ///
    /// A thread that does not hold the buffer first claims it, exactly as an append
    /// would, so flushing an idle stream logs an empty line.
    pub fn flush(&self, stream: Stream) {
        let buffer = self.buffer(stream);
        if let Admission::Reclaimed(previous) = buffer.acquire() {
            self.report_abandoned(stream, previous);
        }
        let delivered = buffer.finalize(|text| {
            self.log_console(stream.level(), text, stream.forces_console());
        });
        if let Err(e) = delivered {
            internal::warn("GATE", &e.to_string());
        }
    }

    fn report_abandoned(&self, stream: Stream, previous: ThreadId) {
        self.log(
            Level::Error,
            &format!(
                "a writer ({previous:?}) forgot to finalize the {stream} stream; buffer reclaimed"
            ),
        );
    }

    /// Changes the root's facility; a no-op on any other node.
    ///
    /// Returns the facility in effect afterwards, which is `None` if a log file could
    /// not be opened.
    ///
    /// # Errors
    /// [`crate::Error::UnsupportedFacility`] when `PlatformLog` has no channel on this build.
    pub fn set_facility(
        &self,
        facility: Facility,
        path: Option<&Path>,
    ) -> Result<Facility, crate::Error> {
        match &self.link {
            Link::Root(router) => router.set_facility(facility, path),
            Link::Child(_) => Ok(self.facility()),
        }
    }

    /// The root's facility.
    #[must_use]
    pub fn facility(&self) -> Facility {
        self.router().facility()
    }

    /// Sets this node's threshold only; parent and children keep theirs.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Sets the threshold from a case-insensitive level name.
    ///
    /// An unknown name logs one Error diagnostic and falls back to Info.
    pub fn set_level_name(&self, name: &str) {
        match name.parse::<Level>() {
            Ok(level) => self.set_level(level),
            Err(_) => {
                self.set_level(Level::Info);
                self.log_console(
                    Level::Error,
                    &format!("Unknown log level \"{name}\"; setting log level to \"INFO\""),
                    true,
                );
            }
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn level_name(&self) -> &'static str {
        self.level().as_str()
    }

    /// True if this node admits Debug. An ancestor may still drop the message.
    #[must_use]
    pub fn is_debugging(&self) -> bool {
        Level::Debug.admitted_by(self.level())
    }

    /// Requests colored console output on this node; stays off unless color was
    /// detected (or declared) possible.
    pub fn colorize(&self, enabled: bool) {
        self.colorize
            .store(enabled && self.color_capable, Ordering::Relaxed);
    }

    /// Whether console output is colored. Only the root's setting is consulted.
    #[must_use]
    pub fn is_colorized(&self) -> bool {
        match &self.link {
            Link::Root(_) => self.colorize.load(Ordering::Relaxed),
            Link::Child(parent) => parent.is_colorized(),
        }
    }

    /// Sets timestamp precision on the root; a no-op on any other node.
    pub fn set_time_precision(&self, precision: TimePrecision) {
        if let Link::Root(router) = &self.link {
            router.set_precision(precision);
        }
    }

    /// The root's timestamp precision.
    #[must_use]
    pub fn time_precision(&self) -> TimePrecision {
        self.router().precision()
    }

    /// The root's process name, used as the syslog ident.
    #[must_use]
    pub fn process_name(&self) -> &str {
        self.router().process_name()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("component", &self.component)
            .field("root", &self.is_root())
            .field("level", &self.level())
            .field("output_to_console", &self.output_to_console)
            .finish_non_exhaustive()
    }
}
