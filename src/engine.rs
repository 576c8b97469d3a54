use crate::error::ExportError;
use crate::filter::{is_ignored_dir, is_ignored_file, is_text_file};
use crate::options::ExportOptions;
use crate::output::OutputSink;
use crate::types::{Encoding, ExportReport, Notice};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ExportOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .hidden(false)
            .parents(options.respect_gitignore)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .require_git(false)
            .max_depth(options.max_depth)
            .follow_links(false);
        if options.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        let ignore_dirs = options.ignore_dirs.clone();
        builder.filter_entry(move |entry| {
            entry.depth() == 0
                || !entry.file_type().is_some_and(|t| t.is_dir())
                || !is_ignored_dir(entry.file_name(), &ignore_dirs)
        });
        Self {
            inner: builder.build(),
        }
    }
    /// Yields every non-directory entry below the root, in walk order.
    fn files(self) -> impl Iterator<Item = Result<PathBuf, ExportError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if is_file_entry(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(ExportError::Walk(e.to_string()))),
        })
    }
}
fn is_file_entry(entry: &DirEntry) -> bool {
    // Symlinks are not followed, but one that resolves to a directory still
    // counts as a directory. Dangling links count as files.
    entry.depth() > 0 && !entry.path().is_dir()
}
/// Reads a file as UTF-8, falling back to Latin-1 when the bytes are not valid UTF-8.
pub fn read_file_content(path: &Path) -> Result<(String, Encoding), ExportError> {
    let bytes = fs::read(path).map_err(|e| ExportError::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok((content, Encoding::Utf8)),
        Err(e) => Ok((decode_latin1(e.as_bytes()), Encoding::Latin1)),
    }
}
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
fn same_file(candidate: &Path, target: Option<&Path>) -> bool {
    let Some(target) = target else {
        return false;
    };
    if candidate.file_name() != target.file_name() {
        return false;
    }
    fs::canonicalize(candidate).is_ok_and(|c| c == target)
}
/// Walks `options.root` and writes every text file into `options.output`.
///
/// Notices are collected into [`ExportReport::notices`]. Use [`export_with`]
/// to receive them as the walk meets each file instead.
pub fn export(options: &ExportOptions) -> Result<ExportReport, ExportError> {
    let mut notices = Vec::new();
    let mut report = export_with(options, |notice| notices.push(notice.clone()))?;
    report.notices = notices;
    Ok(report)
}
/// Like [`export`], but hands each notice to `on_notice` as soon as it is
/// raised and leaves [`ExportReport::notices`] empty.
///
/// Files that cannot be read keep their header and are reported as
/// [`Notice::Unreadable`]; the run carries on. Failing to create or write the
/// output, or a traversal error, aborts the run. Notices raised before the
/// failure have already been delivered.
pub fn export_with<F>(
    options: &ExportOptions,
    mut on_notice: F,
) -> Result<ExportReport, ExportError>
where
    F: FnMut(&Notice),
{
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Exporting {} into {}",
        options.root.display(),
        options.output.display()
    );
    options.validate()?;
    let mut sink = OutputSink::create(&options.output)?;
    let output_real = fs::canonicalize(sink.path()).ok();
    let mut report = ExportReport {
        output: options.output.clone(),
        ..Default::default()
    };
    for path in Walker::new(options).files() {
        let path = path?;
        if !options.ignore_files.is_empty() && is_ignored_file(&path, &options.ignore_files) {
            #[cfg(feature = "logging")]
            tracing::debug!("Ignored by name: {}", path.display());
            report.skipped += 1;
            on_notice(&Notice::IgnoredFile { path });
            continue;
        }
        if !is_text_file(&path, &options.text_extensions) {
            #[cfg(feature = "logging")]
            tracing::debug!("Not a text file: {}", path.display());
            report.skipped += 1;
            on_notice(&Notice::NotText { path });
            continue;
        }
        if same_file(&path, output_real.as_deref()) {
            report.skipped += 1;
            on_notice(&Notice::OutputFile { path });
            continue;
        }
        sink.write_header(&path)?;
        match read_file_content(&path) {
            Ok((content, encoding)) => {
                sink.write_content(&content)?;
                report.exported += 1;
                if encoding == Encoding::Latin1 {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Decoded as Latin-1: {}", path.display());
                    report.latin1_fallbacks += 1;
                }
            }
            Err(e) => {
                let error = match e {
                    ExportError::Io { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                #[cfg(feature = "logging")]
                tracing::warn!("Unreadable file {}: {}", path.display(), error);
                report.unreadable += 1;
                on_notice(&Notice::Unreadable { path, error });
            }
        }
    }
    report.bytes_written = sink.finish()?;
    Ok(report)
}
