//! # Treecat
//!
//! `treecat` walks a directory tree and concatenates every recognized text file
//! into a single output file. Each file is preceded by a path marker:
//!
//! ```text
//!
//!
//! # TREE_FILE_PATH: ./src/main.py
//! <raw file content>
//! ```
//!
//! Directories named in the ignore list are pruned before descending, files are
//! recognized as text by suffix only, and a file that fails to read leaves only
//! its header behind without stopping the run.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treecat::{ExportBuilder, export};
//!
//! let options = ExportBuilder::new("./")
//!     .output("snapshot.txt")
//!     .add_ignore_dirs(vec!["target".to_string()])
//!     .add_ignore_files(vec!["Cargo.lock".to_string()])
//!     .build();
//!
//! let report = export(&options).expect("Failed to export project");
//!
//! for notice in &report.notices {
//!     eprintln!("{}", notice);
//! }
//! println!("Exported {} files to {}", report.exported, report.output.display());
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{export, export_with, read_file_content};
pub use error::ExportError;
pub use options::{
    DEFAULT_IGNORE_DIRS, DEFAULT_OUTPUT, DEFAULT_TEXT_EXTENSIONS, ExportBuilder, ExportOptions,
};
pub use types::{Encoding, ExportReport, Notice};
