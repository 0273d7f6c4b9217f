// htmlmend/src/commands/check.rs
//! The `check` command: scan-only runs for CI gates and audits.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use log::{error, info, warn};

use htmlmend_core::{ChangeRecord, RepairEngine, RunReport};

use crate::walk;

/// Options for one check run.
pub struct CheckOptions {
    pub root: PathBuf,
    pub ext: String,
    pub fail_over_threshold: Option<usize>,
    pub report_path: Option<PathBuf>,
    pub json_stdout: bool,
    pub quiet: bool,
}

/// Scans every document and reports what a repair run would change.
///
/// Never writes. Returns `true` when the number of changed files exceeds
/// the configured threshold, which the caller turns into a non-zero exit.
pub fn run_check(engine: &dyn RepairEngine, opts: CheckOptions) -> Result<bool> {
    let files = walk::find_documents(&opts.root, &opts.ext)?;
    info!("Checking {} document(s) under {}.", files.len(), opts.root.display());

    let mut report = RunReport::new(false);
    for path in &files {
        let source_id = path.display().to_string();
        let record = match fs::read_to_string(path) {
            Err(e) => {
                error!("Failed to read {source_id}: {e}");
                ChangeRecord::failed(source_id, e.to_string())
            }
            Ok(original) => match engine.repair(&original, &source_id) {
                Err(e) => {
                    error!("Failed to check {source_id}: {e:#}");
                    ChangeRecord::failed(source_id, format!("{e:#}"))
                }
                Ok((repaired, summary)) => {
                    ChangeRecord::repaired(source_id, original, repaired, summary)
                }
            },
        };
        report.push(record);
    }

    super::emit_report(&report, opts.report_path.as_deref(), opts.json_stdout)?;
    super::print_summary(&report, "check", opts.quiet);

    let exceeded = opts
        .fail_over_threshold
        .is_some_and(|threshold| report.total_changed > threshold);
    if exceeded {
        warn!(
            "{} file(s) need changes, over the threshold of {}.",
            report.total_changed,
            opts.fail_over_threshold.unwrap_or(0)
        );
    }
    Ok(exceeded)
}
