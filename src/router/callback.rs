//! Injected callback that replaces built-in emission, for bridging into a host
//! application's own logging.

use super::{Record, Sink};
use crate::level::Level;
use std::io;
use std::panic::{self, AssertUnwindSafe};

/// `(level, message, console)`; the message carries component prefixes but no
/// timestamp or tag.
pub type Callback = Box<dyn Fn(Level, &str, bool) + Send + Sync>;

pub struct CallbackSink {
    callback: Callback,
}

impl CallbackSink {
    pub fn new(callback: impl Fn(Level, &str, bool) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Invokes the callback, discarding any panic it raises. Reporting the panic
    /// through the logger would re-enter the callback.
    pub fn call(&self, level: Level, message: &str, console: bool) {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            (self.callback)(level, message, console);
        }));
    }
}

impl Sink for CallbackSink {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.call(record.level, record.message, record.console);
        Ok(())
    }
}
