//! Scoped message assembly over one severity stream.
//!
//! A `Message` claims its stream's buffer on the first write and finalizes it on
//! [`Message::finish`] or when dropped, so everything written through one `Message`
//! lands in a single line no matter how many threads share the node.

use super::Logger;
use crate::gate::Stream;
use std::fmt::{self, Write};
use std::thread;

/// Builder for one log line.
///
/// Two messages open on the same stream in one thread share the stream's buffer: the
/// first to finish emits both texts as one line and the other emits nothing.
///
/// ```
/// use logtree::Logger;
///
/// let logger = Logger::root("demo");
/// logger.info().append("ID: ").append(42).append(", length: ").append(7).finish();
/// ```
#[must_use = "a message is emitted when finished or dropped"]
pub struct Message<'a> {
    logger: &'a Logger,
    stream: Stream,
    claimed: bool,
}

impl<'a> Message<'a> {
    pub(super) const fn new(logger: &'a Logger, stream: Stream) -> Self {
        Self {
            logger,
            stream,
            claimed: false,
        }
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }

    /// Appends the display form of `value`.
    pub fn append(mut self, value: impl fmt::Display) -> Self {
        self.push(value);
        self
    }

    /// In-place variant of [`Self::append`], for loops.
    pub fn push(&mut self, value: impl fmt::Display) -> &mut Self {
        // write_str never fails.
        let _ = write!(self, "{value}");
        self
    }

    /// Emits the line and releases the stream.
    pub fn finish(mut self) {
        self.release();
    }

    // A nested message on the same stream may already have emitted this text.
    fn release(&mut self) {
        if std::mem::take(&mut self.claimed)
            && self.logger.buffer(self.stream).owner() == Some(thread::current().id())
        {
            self.logger.flush(self.stream);
        }
    }
}

impl Write for Message<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.logger.append(self.stream, s);
        self.claimed = true;
        Ok(())
    }
}

impl Drop for Message<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
