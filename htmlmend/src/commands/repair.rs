// htmlmend/src/commands/repair.rs
//! The `repair` command: run the pipeline over every discovered document
//! and optionally persist the results.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info};

use htmlmend_core::{ChangeRecord, RepairEngine, RunReport};

use crate::walk;

/// Options for one repair run.
pub struct RepairOptions {
    pub root: PathBuf,
    pub write: bool,
    pub ext: String,
    pub report_path: Option<PathBuf>,
    pub json_stdout: bool,
    pub quiet: bool,
}

/// Runs the repair pipeline over every document under the root.
///
/// Dry-run by default; with `write` set, changed documents are backed up
/// once and overwritten. Per-file I/O failures are recorded and the run
/// continues.
pub fn run_repair(engine: &dyn RepairEngine, opts: RepairOptions) -> Result<RunReport> {
    let files = walk::find_documents(&opts.root, &opts.ext)?;
    info!(
        "Repairing {} document(s) under {} ({}).",
        files.len(),
        opts.root.display(),
        if opts.write { "write" } else { "dry-run" }
    );

    let mut report = RunReport::new(opts.write);
    for path in &files {
        report.push(process_file(engine, path, opts.write));
    }

    super::emit_report(&report, opts.report_path.as_deref(), opts.json_stdout)?;
    super::print_summary(&report, if opts.write { "written" } else { "dry-run" }, opts.quiet);
    Ok(report)
}

fn process_file(engine: &dyn RepairEngine, path: &Path, write: bool) -> ChangeRecord {
    let source_id = path.display().to_string();

    let original = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read {source_id}: {e}");
            return ChangeRecord::failed(source_id, e.to_string());
        }
    };

    let (repaired, summary) = match engine.repair(&original, &source_id) {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to repair {source_id}: {e:#}");
            return ChangeRecord::failed(source_id, format!("{e:#}"));
        }
    };

    let record = ChangeRecord::repaired(source_id.clone(), original, repaired, summary);
    if write && record.changed {
        if let Err(e) = persist(path, &record.repaired_text) {
            error!("Failed to write {source_id}: {e:#}");
            return ChangeRecord::failed(source_id, format!("{e:#}"));
        }
    }
    record
}

/// Writes the repaired text, first creating a `<file>.bak` copy of the
/// original if one does not already exist.
fn persist(path: &Path, repaired: &str) -> Result<()> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    if !backup.exists() {
        let _ = fs::copy(path, &backup)
            .with_context(|| format!("Failed to back up {} to {}", path.display(), backup.display()))?;
    }
    fs::write(path, repaired)
        .with_context(|| format!("Failed to write repaired text to {}", path.display()))
}
