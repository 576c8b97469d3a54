use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names pruned from traversal unless overridden.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "out",
    ".git",
    "__pycache__",
    "package-lock",
];

/// Suffixes that mark a file as text. Matched against the whole base name.
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    ".html",
    ".css",
    ".js",
    ".json",
    ".txt",
    ".py",
    ".xml",
    ".md",
    ".ts",
    ".tsx",
    ".prisma",
    ".env",
    ".gitignore",
    ".env.production",
];

pub const DEFAULT_OUTPUT: &str = "full_project_v4.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub ignore_dirs: Vec<String>,
    pub ignore_files: Vec<String>,
    pub text_extensions: Vec<String>,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub sort_by_name: bool,
}
impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./"),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ignore_dirs: to_owned_list(DEFAULT_IGNORE_DIRS),
            ignore_files: Vec::new(),
            text_extensions: to_owned_list(DEFAULT_TEXT_EXTENSIONS),
            respect_gitignore: false,
            max_depth: None,
            sort_by_name: false,
        }
    }
}
impl ExportOptions {
    /// Loads options from a JSON file. Keys left out fall back to the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        let options: Self = serde_json::from_str(&raw)
            .map_err(|e| ExportError::Config(format!("{}: {}", path.display(), e)))?;
        options.validate()?;
        Ok(options)
    }
    /// Every text suffix must start with `.`, otherwise `py` would match `happy`.
    pub fn validate(&self) -> Result<(), ExportError> {
        match self
            .text_extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            Some(bad) => Err(ExportError::Config(format!(
                "text extension '{}' must start with '.'",
                bad
            ))),
            None => Ok(()),
        }
    }
}
fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
#[derive(Debug, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}
impl ExportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ExportOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: ExportOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn ignore_dirs(mut self, names: Vec<String>) -> Self {
        self.options.ignore_dirs = names;
        self
    }
    pub fn add_ignore_dirs(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.options.ignore_dirs.extend(names);
        self
    }
    pub fn ignore_files(mut self, names: Vec<String>) -> Self {
        self.options.ignore_files = names;
        self
    }
    pub fn add_ignore_files(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.options.ignore_files.extend(names);
        self
    }
    pub fn text_extensions(mut self, suffixes: Vec<String>) -> Self {
        self.options.text_extensions = suffixes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn sort_by_name(mut self, yes: bool) -> Self {
        self.options.sort_by_name = yes;
        self
    }
    pub fn build(self) -> ExportOptions {
        self.options
    }
}
