// htmlmend-core/src/engines/markup_engine.rs
//! The streaming markup repair engine.
//!
//! Runs the three repair passes in order over the evolving text:
//! encoding fixups, then tag balancing, then text-node escaping. Each
//! markup pass re-classifies the current text with the shared region
//! scanner, so balancing and escaping can never disagree about span
//! boundaries.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;

use crate::balancer::TagBalancer;
use crate::config::RepairConfig;
use crate::engine::RepairEngine;
use crate::escaper::escape_text_angles;
use crate::fixups::apply_fixups;
use crate::report::RepairSummary;

/// The concrete fixup → balance → escape pipeline.
#[derive(Debug)]
pub struct MarkupEngine {
    config: RepairConfig,
}

impl MarkupEngine {
    /// Builds an engine over a validated configuration.
    pub fn new(config: RepairConfig) -> Result<Self> {
        config
            .validate()
            .context("Failed to construct MarkupEngine from invalid config")?;
        Ok(Self { config })
    }
}

impl RepairEngine for MarkupEngine {
    fn repair(&self, content: &str, source_id: &str) -> Result<(String, RepairSummary)> {
        let mut summary = RepairSummary::default();

        let (text, fixups_applied) = apply_fixups(content, &self.config.fixups);
        summary.fixups_applied = fixups_applied;

        let balancer = TagBalancer::new(&self.config);
        let (text, tally) = balancer.balance(&text);
        summary.orphan_closes_dropped = tally.orphan_closes_dropped;
        summary.closes_synthesized = tally.closes_synthesized;

        let text = if self.config.escape_text {
            let (escaped, angles_escaped) = escape_text_angles(&text);
            summary.angles_escaped = angles_escaped;
            escaped
        } else {
            text
        };

        debug!(
            "{source_id}: {} fixup(s), {} orphan(s) dropped, {} close(s) synthesized, {} angle(s) escaped",
            summary.fixups_applied,
            summary.orphan_closes_dropped,
            summary.closes_synthesized,
            summary.angles_escaped
        );
        Ok((text, summary))
    }

    fn analyze(&self, content: &str, source_id: &str) -> Result<RepairSummary> {
        let (_, summary) = self.repair(content, source_id)?;
        Ok(summary)
    }

    fn config(&self) -> &RepairConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_engine() -> MarkupEngine {
        MarkupEngine::new(RepairConfig::load_default().unwrap()).unwrap()
    }

    #[test]
    fn full_pipeline_applies_all_passes() {
        let engine = default_engine();
        let input = "a \u{e2}\u{20ac}\u{201d} b in <div>5 < 10<div>deep</div>";
        let (out, summary) = engine.repair(input, "test.html").unwrap();
        assert_eq!(out, "a — b in <div>5 &lt; 10<div>deep</div></div>");
        assert_eq!(summary.fixups_applied, 1);
        assert_eq!(summary.closes_synthesized, 1);
        assert_eq!(summary.angles_escaped, 1);
    }

    #[test]
    fn escape_pass_can_be_disabled() {
        let mut config = RepairConfig::load_default().unwrap();
        config.escape_text = false;
        let engine = MarkupEngine::new(config).unwrap();
        let (out, summary) = engine.repair("5 < 10 in <div>x</div>", "t").unwrap();
        assert_eq!(out, "5 < 10 in <div>x</div>");
        assert_eq!(summary.angles_escaped, 0);
    }

    #[test]
    fn unchanged_input_reports_zero_repairs() {
        let engine = default_engine();
        let input = "<!DOCTYPE html><div>fine</div>";
        let (out, summary) = engine.repair(input, "t").unwrap();
        assert_eq!(out, input);
        assert_eq!(summary.total_repairs(), 0);
    }

    #[test]
    fn analyze_matches_repair_tallies() {
        let engine = default_engine();
        let input = "<div><div>Text</div>";
        let (_, from_repair) = engine.repair(input, "t").unwrap();
        let from_analyze = engine.analyze(input, "t").unwrap();
        assert_eq!(from_repair, from_analyze);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = RepairConfig {
            trackable_tags: vec!["br".into()],
            void_tags: vec!["br".into()],
            ..RepairConfig::default()
        };
        assert!(MarkupEngine::new(config).is_err());
    }
}
