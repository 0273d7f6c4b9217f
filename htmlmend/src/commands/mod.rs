// htmlmend/src/commands/mod.rs
//! Command implementations and the output helpers they share.
//!
//! License: MIT OR Apache-2.0

pub mod check;
pub mod repair;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;

use htmlmend_core::RunReport;

/// Persists and/or prints the JSON run report as requested.
pub(crate) fn emit_report(
    report: &RunReport,
    report_path: Option<&Path>,
    json_stdout: bool,
) -> Result<()> {
    if let Some(path) = report_path {
        fs::write(path, report.to_json()?)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("report -> {}", path.display());
    }
    if json_stdout {
        println!("{}", report.to_json()?);
    }
    Ok(())
}

/// Prints the human summary to stderr, colored when stderr is a terminal.
///
/// `mode` names what the run did with its findings: "written", "dry-run",
/// or "check".
pub(crate) fn print_summary(report: &RunReport, mode: &str, quiet: bool) {
    if quiet {
        return;
    }
    let mut err = io::stderr();
    let colored = err.is_terminal();

    for record in &report.records {
        if let Some(error) = &record.error {
            let line = format!("  failed  {}: {}", record.file_path, error);
            let _ = if colored {
                writeln!(err, "{}", line.red())
            } else {
                writeln!(err, "{line}")
            };
        } else if record.changed {
            let line = format!(
                "  changed {} ({} fixup(s), {} structural, {} escaped)",
                record.file_path,
                record.summary.fixups_applied,
                record.summary.structural_repairs(),
                record.summary.angles_escaped
            );
            let _ = if colored {
                writeln!(err, "{}", line.yellow())
            } else {
                writeln!(err, "{line}")
            };
        }
    }

    let totals = format!(
        "htmlmend: scanned {} file(s), changed {} ({mode})",
        report.total_scanned, report.total_changed
    );
    let _ = if colored {
        writeln!(err, "{}", totals.green())
    } else {
        writeln!(err, "{totals}")
    };
}
