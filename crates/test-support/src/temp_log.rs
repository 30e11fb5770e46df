//! crates/test-support/src/temp_log.rs
//! Temporary log files for file-backed output tests.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

/// Temporary log file that is removed when dropped.
#[derive(Debug)]
pub struct TempLog {
    file: NamedTempFile,
}

impl TempLog {
    /// Creates an empty temporary file.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            file: NamedTempFile::new()?,
        })
    }

    /// Path of the temporary file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Opens an additional writable handle to the file.
    pub fn writer(&self) -> io::Result<File> {
        self.file.reopen()
    }

    /// Reads the whole file.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn writes_through_reopened_handle_are_visible() {
        let log = TempLog::new().expect("temp file");
        let mut writer = log.writer().expect("reopen");
        writer.write_all(b"line\n").expect("write succeeds");
        drop(writer);

        assert_eq!(log.read().expect("read"), b"line\n");
    }
}
