//! Console output. Lines go to stderr unless the root was built with another writer.

use super::{Record, Sink};
use crate::fmt;
use std::io::{self, Write};

/// Writes stamped lines to the console, colored when the record asks for it.
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl ConsoleSink {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Redirects console output, e.g. into a capture buffer for tests.
    #[must_use]
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Sink for ConsoleSink {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        let line = record.line();
        if record.colorize {
            writeln!(self.writer, "{}", fmt::colorize(record.level, line))?;
        } else {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()
    }
}
