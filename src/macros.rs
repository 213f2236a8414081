//! Format-and-emit shorthands over a node's streams.
//!
//! Each macro builds the whole line through one [`crate::Message`], so formatting
//! arguments are appended under a single buffer claim.

/// `log_to!(logger, stream, "fmt", args...)`.
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $stream:expr, $($arg:tt)+) => {{
        let mut message = $logger.stream($stream);
        let _ = ::std::fmt::Write::write_fmt(&mut message, ::std::format_args!($($arg)+));
        message.finish();
    }};
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $crate::Stream::Critical, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $crate::Stream::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $crate::Stream::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $crate::Stream::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $crate::Stream::Debug, $($arg)+)
    };
}

/// Info-level line that is always copied to the console.
#[macro_export]
macro_rules! log_console {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $crate::Stream::Console, $($arg)+)
    };
}
