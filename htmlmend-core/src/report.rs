// htmlmend-core/src/report.rs
//! Per-document change records and the aggregated run report.
//!
//! A [`ChangeRecord`] is produced for every processed document; the
//! [`RunReport`] aggregates them with run totals and serializes to JSON.
//! The original and repaired texts travel with the in-memory record (the
//! write path needs them) but are skipped during serialization — the
//! report artifact carries paths, flags, and tallies only.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Tallies of what the repair pipeline did to one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairSummary {
    /// Encoding-fixup substitutions performed.
    pub fixups_applied: usize,
    /// Orphan closing tags dropped by the balancer.
    pub orphan_closes_dropped: usize,
    /// Closing tags synthesized by the balancer.
    pub closes_synthesized: usize,
    /// Angle-bracket characters escaped in text nodes.
    pub angles_escaped: usize,
}

impl RepairSummary {
    /// The number of structural repairs: dropped orphans plus synthesized
    /// closes. Fixups and escapes are textual, not structural.
    pub fn structural_repairs(&self) -> usize {
        self.orphan_closes_dropped + self.closes_synthesized
    }

    /// Total count of individual edits across all passes.
    pub fn total_repairs(&self) -> usize {
        self.fixups_applied + self.structural_repairs() + self.angles_escaped
    }
}

/// The outcome of repairing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Path of the document, used for reporting only.
    pub file_path: String,
    /// Whether the repaired text differs from the original.
    pub changed: bool,
    /// What the pipeline did.
    pub summary: RepairSummary,
    /// Set when the document could not be read or written; the run
    /// continues past it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    /// Original text, in-memory only.
    #[serde(skip)]
    pub original_text: String,
    /// Repaired text, in-memory only.
    #[serde(skip)]
    pub repaired_text: String,
}

impl ChangeRecord {
    /// Builds a record from a completed repair.
    pub fn repaired(
        file_path: impl Into<String>,
        original_text: String,
        repaired_text: String,
        summary: RepairSummary,
    ) -> Self {
        let changed = original_text != repaired_text;
        Self {
            file_path: file_path.into(),
            changed,
            summary,
            error: None,
            original_text,
            repaired_text,
        }
    }

    /// Builds a record for a document that failed at the I/O boundary.
    pub fn failed(file_path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            changed: false,
            summary: RepairSummary::default(),
            error: Some(error.into()),
            original_text: String::new(),
            repaired_text: String::new(),
        }
    }
}

/// Aggregated results of one repair run across many documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// RFC 3339 timestamp of when the run started.
    pub timestamp: String,
    /// Whether this run persisted its repairs.
    pub write_mode: bool,
    /// Documents processed, including failed ones.
    pub total_scanned: usize,
    /// Documents whose repaired text differs from the original.
    pub total_changed: usize,
    /// Per-document records, in processing order.
    pub records: Vec<ChangeRecord>,
}

impl RunReport {
    pub fn new(write_mode: bool) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            write_mode,
            total_scanned: 0,
            total_changed: 0,
            records: Vec::new(),
        }
    }

    /// Appends a record, keeping the run totals consistent.
    pub fn push(&mut self, record: ChangeRecord) {
        self.total_scanned += 1;
        if record.changed {
            self.total_changed += 1;
        }
        self.records.push(record);
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_updates_totals() {
        let mut report = RunReport::new(false);
        report.push(ChangeRecord::repaired(
            "a.html",
            "x".into(),
            "x".into(),
            RepairSummary::default(),
        ));
        report.push(ChangeRecord::repaired(
            "b.html",
            "<div>".into(),
            "<div></div>".into(),
            RepairSummary { closes_synthesized: 1, ..RepairSummary::default() },
        ));
        assert_eq!(report.total_scanned, 2);
        assert_eq!(report.total_changed, 1);
    }

    #[test]
    fn serialized_report_omits_document_texts() {
        let mut report = RunReport::new(true);
        report.push(ChangeRecord::repaired(
            "a.html",
            "<div>secret original".into(),
            "<div>secret original</div>".into(),
            RepairSummary { closes_synthesized: 1, ..RepairSummary::default() },
        ));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"a.html\""));
        assert!(json.contains("\"closes_synthesized\": 1"));
        assert!(!json.contains("secret original"));
    }

    #[test]
    fn failed_record_carries_error() {
        let record = ChangeRecord::failed("gone.html", "permission denied");
        assert!(!record.changed);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("permission denied"));
    }

    #[test]
    fn structural_repairs_exclude_textual_edits() {
        let summary = RepairSummary {
            fixups_applied: 3,
            orphan_closes_dropped: 1,
            closes_synthesized: 2,
            angles_escaped: 4,
        };
        assert_eq!(summary.structural_repairs(), 3);
        assert_eq!(summary.total_repairs(), 10);
    }
}
