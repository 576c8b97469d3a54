use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How a file's bytes were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    Utf8,
    /// ISO-8859-1, used when the bytes are not valid UTF-8.
    Latin1,
}

/// A console-worthy event recorded during an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The base name is on the file ignore list.
    IgnoredFile { path: PathBuf },
    /// The name carries no recognized text suffix. Nothing is written.
    NotText { path: PathBuf },
    /// The walk reached the output file itself.
    OutputFile { path: PathBuf },
    /// The file could not be read. Only its header is in the output.
    Unreadable { path: PathBuf, error: String },
}

impl Notice {
    pub fn path(&self) -> &PathBuf {
        match self {
            Notice::IgnoredFile { path }
            | Notice::NotText { path }
            | Notice::OutputFile { path }
            | Notice::Unreadable { path, .. } => path,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::IgnoredFile { path } => write!(f, "Ignored file, skipped: {}", path.display()),
            Notice::NotText { path } => write!(f, "Not a text file, ignored: {}", path.display()),
            Notice::OutputFile { path } => {
                write!(f, "Output file, skipped: {}", path.display())
            }
            Notice::Unreadable { path, error } => {
                write!(f, "Error reading file {}: {}", path.display(), error)
            }
        }
    }
}

/// Summary of a finished export.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExportReport {
    pub output: PathBuf,
    /// Files whose header and content were written.
    pub exported: usize,
    /// Exported files that needed the Latin-1 fallback.
    pub latin1_fallbacks: usize,
    /// Files that got a header but no content.
    pub unreadable: usize,
    /// Files excluded by name, suffix, or for being the output itself.
    pub skipped: usize,
    pub bytes_written: u64,
    /// Notices in traversal order.
    pub notices: Vec<Notice>,
}
