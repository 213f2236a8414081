//! Per-(node, severity) exclusive-write arbitration over an accumulating text buffer.
//!
//! A thread claims a buffer on its first append and keeps it until it finalizes, so a
//! multi-token message is delivered as one uninterleaved unit. Other threads appending
//! to the same buffer block on a condition variable. If the owner holds the buffer for
//! a full contention timeout without finalizing, the waiter reclaims it and the caller
//! is told so it can report the abandoned writer.
//!
//! Buffers share no state with each other: different severities on one node, or one
//! severity on different nodes, never contend.

use crate::Error;
use crate::level::Level;
use parking_lot::{Condvar, Mutex};
use std::fmt;
use std::thread::{self, ThreadId};
use std::time::Duration;

/// How long a writer waits on a held buffer before reclaiming it.
pub const DEFAULT_CONTENTION_TIMEOUT: Duration = Duration::from_secs(1);

/// One of the six streams every node exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
    /// Logs at Info and forces a console copy regardless of facility.
    Console,
}

impl Stream {
    /// All streams in buffer-slot order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Console,
        ]
    }

    /// Severity at which a finalized line is logged.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Critical => Level::Critical,
            Self::Error => Level::Error,
            Self::Warning => Level::Warning,
            Self::Info | Self::Console => Level::Info,
            Self::Debug => Level::Debug,
        }
    }

    /// Whether finalized lines carry the console flag.
    #[must_use]
    pub const fn forces_console(self) -> bool {
        matches!(self, Self::Console)
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Critical => 0,
            Self::Error => 1,
            Self::Warning => 2,
            Self::Info => 3,
            Self::Debug => 4,
            Self::Console => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Console => "console",
        }
    }
}

impl From<Level> for Stream {
    fn from(level: Level) -> Self {
        match level {
            Level::Critical => Self::Critical,
            Level::Error => Self::Error,
            Level::Warning => Self::Warning,
            Level::Info => Self::Info,
            Level::Debug => Self::Debug,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the calling thread came to own the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The buffer was idle.
    Claimed,
    /// The caller already owned it.
    Held,
    /// The caller waited for another owner to finalize.
    Handoff,
    /// The previous owner never finalized within the timeout; the buffer was taken from it.
    Reclaimed(ThreadId),
}

impl Admission {
    #[must_use]
    pub const fn was_reclaimed(self) -> bool {
        matches!(self, Self::Reclaimed(_))
    }
}

#[derive(Debug, Default)]
struct BufferState {
    text: String,
    owner: Option<ThreadId>,
}

/// Accumulating text buffer with single-owner write access.
#[derive(Debug)]
pub struct SeverityBuffer {
    stream: Stream,
    timeout: Duration,
    state: Mutex<BufferState>,
    released: Condvar,
}

impl SeverityBuffer {
    #[must_use]
    pub fn new(stream: Stream, timeout: Duration) -> Self {
        Self {
            stream,
            timeout,
            state: Mutex::new(BufferState::default()),
            released: Condvar::new(),
        }
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True while some thread owns the buffer.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.lock().owner.is_some()
    }

    /// Identity of the current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<ThreadId> {
        self.state.lock().owner
    }

    /// Number of bytes accumulated and not yet finalized.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.state.lock().text.len()
    }

    /// Blocks until the calling thread owns the buffer.
    ///
    /// The timeout restarts whenever ownership changes hands, so a waiter only reclaims
    /// from an owner that has itself held the buffer for the whole timeout.
    pub fn acquire(&self) -> Admission {
        let me = thread::current().id();
        let mut state = self.state.lock();
        let mut waited = false;

        loop {
            match state.owner {
                None => {
                    state.owner = Some(me);
                    return if waited {
                        Admission::Handoff
                    } else {
                        Admission::Claimed
                    };
                }
                Some(owner) if owner == me => return Admission::Held,
                Some(owner) => {
                    waited = true;
                    let result = self.released.wait_while_for(
                        &mut state,
                        |s| s.owner == Some(owner),
                        self.timeout,
                    );
                    if result.timed_out() && state.owner == Some(owner) {
                        state.owner = Some(me);
                        return Admission::Reclaimed(owner);
                    }
                }
            }
        }
    }

    /// Claims the buffer for the calling thread and appends `text`.
    ///
    /// `on_reclaim` runs after a forced reclaim, with ownership already transferred and
    /// the buffer lock released, before `text` is appended.
    pub fn acquire_and_append(&self, text: &str, on_reclaim: impl FnOnce(ThreadId)) -> Admission {
        let admission = self.acquire();
        if let Admission::Reclaimed(previous) = admission {
            on_reclaim(previous);
        }
        self.state.lock().text.push_str(text);
        admission
    }

    /// Hands the accumulated text to `deliver`, clears it, releases ownership and wakes
    /// one waiter.
    ///
    /// `deliver` runs while the caller still owns the buffer but without the buffer lock
    /// held, so it may block on downstream locks without stalling `is_busy` queries.
    ///
    /// # Errors
    /// [`Error::NotOwner`] if the calling thread does not own the buffer.
    pub fn finalize(&self, deliver: impl FnOnce(&str)) -> Result<(), Error> {
        let me = thread::current().id();
        let text = {
            let mut state = self.state.lock();
            if state.owner != Some(me) {
                return Err(Error::NotOwner(self.stream));
            }
            std::mem::take(&mut state.text)
        };

        deliver(&text);

        let mut state = self.state.lock();
        if state.owner == Some(me) {
            state.owner = None;
        }
        drop(state);
        self.released.notify_one();
        Ok(())
    }
}
