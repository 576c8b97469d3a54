//! Command-line interface for treecat.
//!
//! Run with no arguments to export the current directory into
//! `full_project_v4.txt` using the built-in ignore lists.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treecat::{ExportBuilder, ExportError, ExportOptions, ExportReport, export_with};

/// treecat — flatten a project tree into one text file
#[derive(Parser)]
#[command(name = "treecat", version, about, long_about = None)]
struct Cli {
    /// Root directory (default ./)
    root: Option<PathBuf>,

    /// Output file, truncated if it exists
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extra directory names to prune (can be repeated)
    #[arg(short = 'D', long = "ignore-dir")]
    ignore_dirs: Vec<String>,

    /// File base names to skip (can be repeated)
    #[arg(short = 'F', long = "ignore-file")]
    ignore_files: Vec<String>,

    /// Do not start from the built-in directory ignore list
    #[arg(long)]
    no_default_ignores: bool,

    /// Load base options from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Visit siblings in file name order
    #[arg(long)]
    sort: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Do not print per-file notices
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_options(self) -> Result<(ExportOptions, bool, bool), ExportError> {
        let base = match &self.config {
            Some(path) => ExportOptions::from_json_file(path)?,
            None => ExportOptions::default(),
        };
        let mut builder = ExportBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        if self.no_default_ignores {
            builder = builder.ignore_dirs(Vec::new());
        }
        builder = builder
            .add_ignore_dirs(self.ignore_dirs)
            .add_ignore_files(self.ignore_files);
        if self.gitignore {
            builder = builder.respect_gitignore(true);
        }
        if self.max_depth.is_some() {
            builder = builder.max_depth(self.max_depth);
        }
        if self.sort {
            builder = builder.sort_by_name(true);
        }
        Ok((builder.build(), self.json, self.quiet))
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, json, quiet) = match cli.into_options() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let mut notices = Vec::new();
    let result = export_with(&options, |notice| {
        if !quiet {
            eprintln!("{}", notice);
        }
        if json {
            notices.push(notice.clone());
        }
    });
    match result {
        Ok(mut report) => {
            report.notices = notices;
            print_report(&report, json);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &ExportReport, json: bool) {
    if json {
        let out = serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", out);
    } else {
        println!(
            "The project was exported successfully to {}",
            report.output.display()
        );
    }
}
