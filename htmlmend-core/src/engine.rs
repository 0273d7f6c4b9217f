// htmlmend-core/src/engine.rs
//! Defines the core `RepairEngine` trait.
//!
//! The trait decouples callers (CLI, tests, embedding applications) from
//! the concrete repair pipeline, keeping the core API consistent and
//! interchangeable should other repair strategies appear.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::config::RepairConfig;
use crate::report::RepairSummary;

/// A trait that defines the core functionality of a repair engine.
///
/// Engines are pure per document: no I/O, no state shared between calls,
/// so invocations over many documents are independent and may run on any
/// number of threads.
pub trait RepairEngine: Send + Sync {
    /// Repairs the provided document text.
    ///
    /// Returns the repaired text and a tally of what was done. The
    /// `source_id` (typically a file path) is used only for logging and
    /// reporting.
    fn repair(&self, content: &str, source_id: &str) -> Result<(String, RepairSummary)>;

    /// Runs the pipeline without yielding the repaired text.
    ///
    /// Used by scan-only callers that need counts but will never persist.
    fn analyze(&self, content: &str, source_id: &str) -> Result<RepairSummary>;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &RepairConfig;
}
