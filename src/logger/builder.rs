//! Stepwise construction of root and child nodes.
//!
//! Options that only make sense on the root (process name, console writer, syslog and
//! platform channels, custom sink, time precision) are ignored when a parent is set.

use super::{Link, Logger};
use crate::fmt::{self, TimePrecision};
use crate::gate::{DEFAULT_CONTENTION_TIMEOUT, SeverityBuffer, Stream};
use crate::level::Level;
use crate::router::platform;
use crate::router::syslog::SystemSyslog;
use crate::router::{CallbackSink, ConsoleSink, PlatformChannel, Router, SyslogChannel};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8};
use std::time::Duration;

pub struct LoggerBuilder {
    process_name: String,
    component: String,
    parent: Option<Arc<Logger>>,
    level: Option<Level>,
    output_to_console: bool,
    color_capable: Option<bool>,
    colors: Option<bool>,
    contention_timeout: Duration,
    precision: TimePrecision,
    console: Option<ConsoleSink>,
    syslog: Option<Arc<dyn SyslogChannel>>,
    platform: Option<Arc<dyn PlatformChannel>>,
    sink: Option<CallbackSink>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info threshold, console facility, microsecond timestamps, 1 s contention timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            process_name: String::new(),
            component: String::new(),
            parent: None,
            level: None,
            output_to_console: false,
            color_capable: None,
            colors: None,
            contention_timeout: DEFAULT_CONTENTION_TIMEOUT,
            precision: TimePrecision::default(),
            console: None,
            syslog: None,
            platform: None,
            sink: None,
        }
    }

    /// Ident for syslog and tag for the platform log. Root only.
    #[must_use]
    pub fn process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = name.into();
        self
    }

    /// Prefix added as `[name] ` to every message passing through the node.
    #[must_use]
    pub fn component(mut self, name: impl Into<String>) -> Self {
        self.component = name.into();
        self
    }

    /// Makes the node a child that forwards to `parent`.
    #[must_use]
    pub fn parent(mut self, parent: Arc<Logger>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Initial threshold. Children default to their parent's threshold at build time.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Copy every message passing through this node to the console.
    #[must_use]
    pub const fn output_to_console(mut self, enabled: bool) -> Self {
        self.output_to_console = enabled;
        self
    }

    /// Overrides terminal detection; children inherit the parent's capability.
    #[must_use]
    pub const fn color_capable(mut self, capable: bool) -> Self {
        self.color_capable = Some(capable);
        self
    }

    /// Initial color request, still gated on capability. Defaults to the parent's
    /// setting, or to the detected capability on a root.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    /// How long a writer waits on a held stream before reclaiming it.
    #[must_use]
    pub const fn contention_timeout(mut self, timeout: Duration) -> Self {
        self.contention_timeout = timeout;
        self
    }

    /// Root only.
    #[must_use]
    pub const fn time_precision(mut self, precision: TimePrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Sends console output to `writer` instead of stderr. Root only.
    #[must_use]
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(ConsoleSink::new(writer));
        self
    }

    /// Replaces the operating system's syslog. Root only.
    #[must_use]
    pub fn syslog_channel(mut self, channel: impl SyslogChannel + 'static) -> Self {
        self.syslog = Some(Arc::new(channel));
        self
    }

    /// Supplies a platform log channel, enabling `Facility::PlatformLog` on builds
    /// without one. Root only.
    #[must_use]
    pub fn platform_channel(mut self, channel: impl PlatformChannel + 'static) -> Self {
        self.platform = Some(Arc::new(channel));
        self
    }

    /// Replaces all built-in emission with `callback(level, message, console)`.
    /// Panics raised by the callback are discarded. Root only.
    #[must_use]
    pub fn sink(
        mut self,
        callback: impl Fn(Level, &str, bool) + Send + Sync + 'static,
    ) -> Self {
        self.sink = Some(CallbackSink::new(callback));
        self
    }

    #[must_use]
    pub fn build(self) -> Arc<Logger> {
        let timeout = self.contention_timeout;
        let buffers = Stream::all().map(|stream| SeverityBuffer::new(stream, timeout));

        let (link, level, color_capable, colors) = match self.parent {
            Some(parent) => {
                let level = self.level.unwrap_or_else(|| parent.level());
                let capable = self.color_capable.unwrap_or(parent.color_capable);
                let colors = self.colors.unwrap_or_else(|| parent.is_colorized());
                (Link::Child(parent), level, capable, colors)
            }
            None => {
                let capable = self.color_capable.unwrap_or_else(fmt::color_possible);
                let router = Router::new(
                    self.process_name,
                    self.console.unwrap_or_default(),
                    self.syslog
                        .unwrap_or_else(|| Arc::new(SystemSyslog::new()) as Arc<dyn SyslogChannel>),
                    self.platform.or_else(platform::system_channel),
                    self.sink,
                );
                router.set_precision(self.precision);
                (
                    Link::Root(router),
                    self.level.unwrap_or_default(),
                    capable,
                    self.colors.unwrap_or(capable),
                )
            }
        };

        Arc::new(Logger {
            component: self.component,
            link,
            threshold: AtomicU8::new(level as u8),
            colorize: AtomicBool::new(colors && color_capable),
            color_capable,
            output_to_console: self.output_to_console,
            buffers,
        })
    }
}
