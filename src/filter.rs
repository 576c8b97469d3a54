//! Name-based inclusion rules.
//!
//! Nothing here looks at file contents: a file is text when its base name ends
//! with one of the configured suffixes, compared exactly and case-sensitively.
//! Suffixes such as `.gitignore` or `.env.production` therefore match files
//! whose whole name is that suffix.

use std::ffi::OsStr;
use std::path::Path;

fn base_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Returns true when the base name of `path` ends with any of `extensions`.
pub fn is_text_file(path: &Path, extensions: &[String]) -> bool {
    match base_name(path) {
        Some(name) => extensions
            .iter()
            .any(|ext| !ext.is_empty() && name.ends_with(ext.as_str())),
        None => false,
    }
}

/// Returns true when the base name of `path` is listed in `ignore_files`.
pub fn is_ignored_file(path: &Path, ignore_files: &[String]) -> bool {
    match base_name(path) {
        Some(name) => ignore_files.iter().any(|f| f == name),
        None => false,
    }
}

pub fn is_ignored_dir(name: &OsStr, ignore_dirs: &[String]) -> bool {
    ignore_dirs.iter().any(|d| OsStr::new(d) == name)
}
