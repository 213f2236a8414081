// Forbid unsafe code except where the syslog or Android log FFI needs it
#![cfg_attr(
    not(any(all(unix, feature = "syslog"), target_os = "android")),
    forbid(unsafe_code)
)]

//! `logtree` - Hierarchical, thread-safe logging.
//!
//! Applications build a tree of [`Logger`] nodes: one root, and children mirroring the
//! component structure. Messages flow from the node that wrote them up to the root,
//! each node filtering by its own threshold and adding its `[component]` prefix. Only
//! the root owns the physical output (console, file, syslog, platform log, or an
//! injected callback) and it serializes every final write.
//!
//! Each node offers one stream per severity. A thread writing to a stream owns it until
//! it finishes the line, so multi-token messages never interleave.
//!
//! # Example
//!
//! ```
//! use logtree::{Facility, Level, Logger};
//!
//! let root = Logger::root("myapp");
//! root.set_level(Level::Debug);
//!
//! let net = root.child("NET");
//! net.info().append("connected to ").append("10.0.0.1").finish();
//! logtree::log_warning!(net, "retry {} of {}", 1, 3);
//!
//! root.set_facility(Facility::None, None).unwrap();
//! ```
//!
//! # Features
//!
//! - `syslog` (default): Uses the system's syslog(3) on unix targets

pub mod config;
mod error;
pub mod fmt;
pub mod gate;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod router;

pub use config::Config;
pub use error::Error;
pub use fmt::TimePrecision;
pub use gate::{Admission, SeverityBuffer, Stream};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, Message};
pub use router::{Facility, PlatformChannel, Sink, SyslogChannel};
