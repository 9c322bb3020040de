//! Atomic output file
//!
//! Encoders write into a temporary file in the destination directory. The
//! temporary file replaces the destination only on [`OutputSink::commit`];
//! dropping the sink without committing deletes it.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Temporary output file that becomes the destination on commit
pub struct OutputSink {
    temp: NamedTempFile,
    final_path: PathBuf,
}

impl OutputSink {
    /// Open a sink for `path`
    ///
    /// Fails if the destination directory does not exist or is not writable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let final_path = path.as_ref().to_path_buf();
        let dir = match final_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !dir.is_dir() {
            return Err(Error::write(
                &final_path,
                format!("directory '{}' does not exist", dir.display()),
            ));
        }

        let temp = tempfile::Builder::new()
            .prefix(".json2tables-")
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(|e| Error::write(&final_path, format!("failed to create file: {e}")))?;

        Ok(Self { temp, final_path })
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.final_path
    }

    /// Writable handle to the temporary file
    pub fn file_mut(&mut self) -> &mut File {
        self.temp.as_file_mut()
    }

    /// Flush, sync and move the temporary file over the destination
    pub fn commit(mut self) -> Result<()> {
        let final_path = self.final_path;

        self.temp
            .as_file_mut()
            .flush()
            .and_then(|()| self.temp.as_file().sync_all())
            .map_err(|e| Error::write(&final_path, format!("failed to flush file: {e}")))?;

        self.temp
            .persist(&final_path)
            .map_err(|e| Error::write(&final_path, format!("failed to finalize file: {}", e.error)))?;

        Ok(())
    }
}
