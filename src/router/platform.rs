//! Platform log facility (Android's `liblog`).
//!
//! Only Android builds have a system channel. Elsewhere a channel must be supplied to
//! the builder, otherwise selecting [`super::Facility::PlatformLog`] fails.

use super::{Record, Sink};
use std::io;
use std::sync::Arc;

/// `write(priority, tag, text)` into the platform's log service.
pub trait PlatformChannel: Send + Sync {
    fn write(&self, priority: i32, tag: &str, text: &str);
}

pub struct PlatformSink {
    channel: Arc<dyn PlatformChannel>,
    tag: String,
}

impl PlatformSink {
    pub fn new(channel: Arc<dyn PlatformChannel>, tag: &str) -> Self {
        Self {
            channel,
            tag: tag.to_string(),
        }
    }
}

impl Sink for PlatformSink {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.channel
            .write(record.level.platform_priority(), &self.tag, record.line());
        Ok(())
    }
}

/// The channel compiled into this build, if any.
#[must_use]
pub fn system_channel() -> Option<Arc<dyn PlatformChannel>> {
    #[cfg(target_os = "android")]
    {
        Some(Arc::new(android::AndroidLog))
    }
    #[cfg(not(target_os = "android"))]
    {
        None
    }
}

#[cfg(target_os = "android")]
mod android {
    use super::PlatformChannel;
    use std::ffi::{CString, c_char, c_int};

    #[link(name = "log")]
    unsafe extern "C" {
        fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
    }

    pub struct AndroidLog;

    impl PlatformChannel for AndroidLog {
        fn write(&self, priority: i32, tag: &str, text: &str) {
            let (Ok(tag), Ok(text)) = (CString::new(tag), CString::new(text)) else {
                return;
            };
            // SAFETY: both pointers are valid NUL-terminated strings for the call.
            unsafe {
                __android_log_write(priority, tag.as_ptr(), text.as_ptr());
            }
        }
    }
}
