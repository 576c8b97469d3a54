//! The single output stream of an export run.
//!
//! Each exported file becomes two blank lines, a `# TREE_FILE_PATH: <path>`
//! header and then the raw content, with nothing appended after it.

use crate::ExportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Text that starts every header line.
pub const HEADER_PREFIX: &str = "# TREE_FILE_PATH: ";

/// Buffered, truncating writer over the output file.
pub struct OutputSink {
    path: PathBuf,
    writer: BufWriter<File>,
    bytes_written: u64,
}

impl OutputSink {
    /// Creates (or truncates) the output file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| ExportError::io(&path, e))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            bytes_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_header(&mut self, file_path: &Path) -> Result<(), ExportError> {
        let header = format!("\n\n{}{}\n", HEADER_PREFIX, file_path.display());
        self.write_str(&header)
    }

    pub fn write_content(&mut self, content: &str) -> Result<(), ExportError> {
        self.write_str(content)
    }

    /// Flushes the stream and returns the number of bytes written.
    pub fn finish(mut self) -> Result<u64, ExportError> {
        self.writer
            .flush()
            .map_err(|e| ExportError::io(&self.path, e))?;
        Ok(self.bytes_written)
    }

    fn write_str(&mut self, s: &str) -> Result<(), ExportError> {
        self.writer
            .write_all(s.as_bytes())
            .map_err(|e| ExportError::io(&self.path, e))?;
        self.bytes_written += s.len() as u64;
        Ok(())
    }
}
