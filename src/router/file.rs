//! File facility: one handle, opened for append, closed when the sink is dropped.

use super::{Record, Sink};
use crate::internal;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Opens `path` for appending, creating the file but not its parent directories.
    ///
    /// # Errors
    /// Any error from opening the file.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        internal::debug("FILE", &format!("opened {}", path.display()));
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        // Single write per line so concurrent readers never see half a line.
        let line = record.line();
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');
        self.file.write_all(content.as_bytes())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.file.flush();
        internal::debug("FILE", &format!("closed {}", self.path.display()));
    }
}
