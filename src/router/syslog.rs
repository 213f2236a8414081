//! Syslog facility.
//!
//! The system channel calls `openlog`/`syslog`/`closelog` through libc. The channel is a
//! trait so hosts and tests can substitute their own; builds without the `syslog`
//! feature, or on non-unix targets, get a stub that drops writes.

use super::{Record, Sink};
use crate::internal;
use std::io;
use std::sync::Arc;

/// `LOG_PID`: include the process id with every entry.
pub const LOG_PID: i32 = 0x01;
/// `LOG_DAEMON`: system daemons.
pub const LOG_DAEMON: i32 = 3 << 3;

/// The three syslog(3) primitives the router needs.
pub trait SyslogChannel: Send + Sync {
    fn open(&self, ident: &str, option: i32, facility: i32);
    fn close(&self);
    fn write(&self, priority: i32, text: &str);
}

/// Open syslog connection; closed again when dropped.
pub struct SyslogSink {
    channel: Arc<dyn SyslogChannel>,
}

impl SyslogSink {
    /// Opens the channel tagged with `ident`.
    pub fn open(channel: Arc<dyn SyslogChannel>, ident: &str) -> Self {
        channel.open(ident, LOG_PID, LOG_DAEMON);
        Self { channel }
    }
}

impl Sink for SyslogSink {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.channel
            .write(record.level.syslog_priority(), record.message);
        Ok(())
    }
}

impl Drop for SyslogSink {
    fn drop(&mut self) {
        self.channel.close();
    }
}

/// The operating system's syslog.
#[derive(Debug, Default)]
pub struct SystemSyslog {
    #[cfg(all(unix, feature = "syslog"))]
    ident: parking_lot::Mutex<Option<std::ffi::CString>>,
}

impl SystemSyslog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(all(unix, feature = "syslog"))]
impl SyslogChannel for SystemSyslog {
    fn open(&self, ident: &str, option: i32, facility: i32) {
        let Ok(ident) = std::ffi::CString::new(ident) else {
            internal::error("SYSLOG", "process name contains a NUL byte; not opening syslog");
            return;
        };
        let mut slot = self.ident.lock();
        // openlog keeps the ident pointer, so the CString lives in `slot` until close.
        let ident = slot.insert(ident);
        // SAFETY: `ident` is a valid NUL-terminated string that outlives the
        // connection; it is only released after closelog in `close`.
        unsafe {
            libc::openlog(ident.as_ptr(), option, facility);
        }
    }

    fn close(&self) {
        let mut slot = self.ident.lock();
        if slot.is_some() {
            // SAFETY: closelog has no preconditions.
            unsafe {
                libc::closelog();
            }
            *slot = None;
        }
    }

    fn write(&self, priority: i32, text: &str) {
        let Ok(text) = std::ffi::CString::new(text) else {
            internal::warn("SYSLOG", "dropping message containing a NUL byte");
            return;
        };
        // SAFETY: both the "%s" literal and `text` are valid C strings; passing the
        // message as an argument keeps '%' in user text from being interpreted.
        unsafe {
            libc::syslog(priority, c"%s".as_ptr(), text.as_ptr());
        }
    }
}

#[cfg(not(all(unix, feature = "syslog")))]
impl SyslogChannel for SystemSyslog {
    fn open(&self, ident: &str, _option: i32, _facility: i32) {
        internal::error(
            "SYSLOG",
            &format!("syslog is not available on this build; dropping entries for {ident}"),
        );
    }

    fn close(&self) {}

    fn write(&self, _priority: i32, _text: &str) {}
}
