// htmlmend/src/cli.rs
//! This file defines the command-line interface (CLI) for the htmlmend
//! application, including all available commands and their arguments.
//!
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "htmlmend",
    version = env!("CARGO_PKG_VERSION"),
    about = "Repair malformed HTML without building a DOM",
    long_about = "htmlmend is a command-line utility for best-effort syntactic repair of HTML \
documents. It corrects known mis-decoded character sequences (mojibake), reconciles unbalanced \
or mis-nested block-level tags for a configurable set of tag names, and escapes stray angle \
brackets in text nodes, leaving scripts, styles, comments, and void elements untouched.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `htmlmend` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Repairs documents under a directory; dry-run unless --write is given.
    #[command(about = "Repairs documents under a directory; dry-run unless --write is given.")]
    Repair(RepairCommand),

    /// Scans documents and reports what would change, never writing.
    #[command(about = "Scans documents and reports what would change, never writing.")]
    Check(CheckCommand),
}

/// Arguments for the `repair` command.
#[derive(Parser, Debug)]
pub struct RepairCommand {
    /// Directory to scan for documents.
    #[arg(value_name = "ROOT", default_value = ".", help = "Directory to scan for documents.")]
    pub root: PathBuf,

    /// Persist repairs to disk instead of only reporting them.
    #[arg(long, short = 'w', help = "Write repaired documents back to disk, backing each file up first.")]
    pub write: bool,

    /// Path to a custom repair configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "HTMLMEND_CONFIG", help = "Path to a custom repair configuration file (YAML). Falls back to $HTMLMEND_CONFIG.")]
    pub config: Option<PathBuf>,

    /// Track only these tag names for balancing (comma-separated).
    #[arg(long = "track", short = 't', value_delimiter = ',', help = "Track only these tag names for balancing (comma-separated).")]
    pub track: Vec<String>,

    /// Disable escaping of stray angle brackets in text nodes.
    #[arg(long = "no-escape-text", help = "Disable escaping of stray < and > in text nodes.")]
    pub no_escape_text: bool,

    /// File extension to process.
    #[arg(long = "ext", value_name = "EXT", default_value = "html", help = "File extension to process (without the dot).")]
    pub ext: String,

    /// Export the run report to a JSON file.
    #[arg(long = "report", value_name = "FILE", help = "Write the run report as JSON to this file.")]
    pub report: Option<PathBuf>,

    /// Print the run report as JSON to stdout (conflicts with --report).
    #[arg(long = "json-stdout", conflicts_with = "report", help = "Print the run report as JSON to stdout.")]
    pub json_stdout: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Directory to scan for documents.
    #[arg(value_name = "ROOT", default_value = ".", help = "Directory to scan for documents.")]
    pub root: PathBuf,

    /// Path to a custom repair configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "HTMLMEND_CONFIG", help = "Path to a custom repair configuration file (YAML). Falls back to $HTMLMEND_CONFIG.")]
    pub config: Option<PathBuf>,

    /// Track only these tag names for balancing (comma-separated).
    #[arg(long = "track", short = 't', value_delimiter = ',', help = "Track only these tag names for balancing (comma-separated).")]
    pub track: Vec<String>,

    /// Disable escaping of stray angle brackets in text nodes.
    #[arg(long = "no-escape-text", help = "Disable escaping of stray < and > in text nodes.")]
    pub no_escape_text: bool,

    /// File extension to process.
    #[arg(long = "ext", value_name = "EXT", default_value = "html", help = "File extension to process (without the dot).")]
    pub ext: String,

    /// Exit non-zero when more than N files need changes.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if more than N files need changes.")]
    pub fail_over_threshold: Option<usize>,

    /// Export the run report to a JSON file.
    #[arg(long = "report", value_name = "FILE", help = "Write the run report as JSON to this file.")]
    pub report: Option<PathBuf>,

    /// Print the run report as JSON to stdout (conflicts with --report).
    #[arg(long = "json-stdout", conflicts_with = "report", help = "Print the run report as JSON to stdout.")]
    pub json_stdout: bool,
}
