// htmlmend-core/src/lib.rs
//! # htmlmend Core Library
//!
//! `htmlmend-core` provides the fundamental, platform-independent logic for
//! streaming repair of malformed HTML. Given possibly broken markup text it
//! corrects known mis-decoded character sequences, reconciles unbalanced or
//! mis-nested block-level tags, and escapes stray angle brackets in text
//! nodes — all in single forward passes over the text, without building a
//! DOM tree, and without touching `<script>`, `<style>`, comment, or void
//! element content.
//!
//! The library is designed to be pure and stateless: every repair operates
//! on an in-memory string and terminates in time linear in input length,
//! with no state shared between documents. File I/O, discovery, backups,
//! and reporting belong to the CLI crate layered on top.
//!
//! ## Modules
//!
//! * `config`: Defines [`RepairConfig`] — trackable/void tag sets, the
//!   encoding-fixup table, and the escaping switch.
//! * `regions`: The markup region classifier shared by every markup pass.
//! * `fixups`: The ordered literal-substitution encoding fixup pass.
//! * `balancer`: The stack automaton that repairs tag balance.
//! * `escaper`: The text-node angle-bracket escaper.
//! * `engine`: The [`RepairEngine`] trait, enabling a modular design.
//! * `engines`: Concrete implementations of the `RepairEngine` trait.
//! * `report`: Per-document [`ChangeRecord`]s and the aggregated
//!   [`RunReport`].
//! * `headless`: Convenience wrapper for one-shot repair of strings.
//! * `errors`: The structured [`MendError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use htmlmend_core::{repair_string, RepairConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = RepairConfig::load_default()?;
//!     let repaired = repair_string(config, "<div><div>Text</div>", "example.html")?;
//!     assert_eq!(repaired, "<div><div>Text</div></div>");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Repair itself is fail-soft: unterminated tags and comments pass through
//! verbatim, orphan closing tags are defined behavior (dropped and
//! counted), and fixups are total functions over the input. Fallible
//! operations — config loading and validation — use `anyhow::Error`, with
//! [`MendError`] underneath for programmatic handling.
//!
//! ## Design Principles
//!
//! * **One classifier, many passes:** the balancer and escaper consume the
//!   same region scanner, so they cannot drift on where a tag ends and
//!   text begins.
//! * **Stateless:** all per-document data is discarded after the
//!   `ChangeRecord` is produced.
//! * **Configurable vocabularies:** trackable and void tag sets are
//!   injected configuration, not hard-coded globals.
//! * **Best-effort syntactic repair:** this is not an HTML5 parser and
//!   does not aim for parsing-spec conformance.
//!
//! License: MIT OR Apache-2.0

pub mod balancer;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod escaper;
pub mod fixups;
pub mod headless;
pub mod regions;
pub mod report;

/// Re-exports the public configuration types for managing repair settings.
pub use config::{merge_configs, EncodingFixup, RepairConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::MendError;

/// Re-exports the core repair engine trait.
pub use engine::RepairEngine;

/// Re-exports the concrete streaming markup engine.
pub use engines::markup_engine::MarkupEngine;

/// Re-exports the region classifier types for advanced consumers.
pub use regions::{scan_regions, Region, RegionKind};

/// Re-exports tag tokenization and balancing types.
pub use balancer::{parse_tag, BalanceTally, TagBalancer, TagToken};

/// Re-exports reporting types.
pub use report::{ChangeRecord, RepairSummary, RunReport};

/// Re-exports the one-shot convenience entry point.
pub use headless::repair_string;
