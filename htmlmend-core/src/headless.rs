// htmlmend-core/src/headless.rs
//! Convenience wrappers for one-shot, non-interactive use.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::config::RepairConfig;
use crate::engine::RepairEngine;
use crate::engines::markup_engine::MarkupEngine;

/// Fully repairs an input string in a single call.
///
/// Builds a [`MarkupEngine`] from `config`, runs the pipeline, and
/// returns the repaired text. The per-pass tallies are discarded; callers
/// that need them should construct the engine directly.
///
/// # Arguments
///
/// * `config` - The repair configuration (defaults or merged user config).
/// * `content` - The document text to repair.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn repair_string(config: RepairConfig, content: &str, source_id: &str) -> Result<String> {
    let engine = MarkupEngine::new(config)?;
    let (repaired, _) = engine.repair(content, source_id)?;
    Ok(repaired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repair_string_with_default_config() -> Result<()> {
        let config = RepairConfig::load_default()?;
        let repaired = repair_string(config, "<div><div>Text</div>", "test_input")?;
        assert_eq!(repaired, "<div><div>Text</div></div>");
        Ok(())
    }

    #[test]
    fn repair_string_fixes_mojibake() -> Result<()> {
        let config = RepairConfig::load_default()?;
        let repaired = repair_string(config, "a \u{e2}\u{20ac}\u{201d} b", "test_input")?;
        assert_eq!(repaired, "a — b");
        Ok(())
    }

    #[test]
    fn repair_string_rejects_invalid_config() {
        let config = RepairConfig {
            trackable_tags: vec!["div".into(), "div".into()],
            ..RepairConfig::default()
        };
        assert!(repair_string(config, "<div>", "test_input").is_err());
    }
}
