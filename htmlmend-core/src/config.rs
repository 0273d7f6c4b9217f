// htmlmend-core/src/config.rs
//! Configuration management for `htmlmend-core`.
//!
//! Defines the repair configuration: which tag names get their balance
//! repaired, which names are void elements, the ordered encoding-fixup
//! table, and whether text-node escaping runs. Handles YAML
//! serialization, embedded defaults, user-file overrides, and validation.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::MendError;

/// One entry of the encoding-fixup table: a literal byte sequence known to
/// be a mis-decoding artifact, and the character(s) it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EncodingFixup {
    /// The literal mis-decoded sequence to search for.
    pub pattern: String,
    /// The intended text to substitute.
    pub replace_with: String,
}

/// The top-level repair configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RepairConfig {
    /// Tag names whose open/close balance the engine actively repairs.
    /// All other tags pass through unexamined.
    pub trackable_tags: Vec<String>,
    /// Tag names that never have content or a closing tag. Never pushed
    /// onto the balance stack, never given a synthesized close.
    pub void_tags: Vec<String>,
    /// Whether raw `<` / `>` in text nodes are rewritten to entities.
    pub escape_text: bool,
    /// Ordered literal substitutions applied before any markup pass.
    pub fixups: Vec<EncodingFixup>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            trackable_tags: Vec::new(),
            void_tags: Vec::new(),
            escape_text: true,
            fixups: Vec::new(),
        }
    }
}

static DEFAULT_CONFIG: Lazy<Result<RepairConfig, String>> = Lazy::new(|| {
    let default_yaml = include_str!("../config/default_repair.yaml");
    serde_yml::from_str(default_yaml).map_err(|e| e.to_string())
});

impl RepairConfig {
    /// Loads the built-in configuration embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default repair config from embedded string...");
        let config = DEFAULT_CONFIG
            .as_ref()
            .map_err(|e| anyhow!("Failed to parse embedded default config: {e}"))?
            .clone();
        config.validate().context("Embedded default config is invalid")?;
        Ok(config)
    }

    /// Loads a repair configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading repair config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RepairConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(
            "Loaded config: {} trackable tag(s), {} void tag(s), {} fixup(s).",
            config.trackable_tags.len(),
            config.void_tags.len(),
            config.fixups.len()
        );
        Ok(config)
    }

    /// Validates the configuration, aggregating every problem found.
    ///
    /// Checks: no empty or duplicate tag names, trackable names must not
    /// also be void, fixup patterns must be non-empty, and no fixup pattern
    /// may be a prefix of a later entry's pattern (the earlier entry would
    /// shadow the later one and corrupt its matches).
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        let mut seen_trackable = HashSet::new();
        for name in &self.trackable_tags {
            if name.trim().is_empty() {
                errors.push("A trackable tag name is empty.".to_string());
            } else if !seen_trackable.insert(name.to_ascii_lowercase()) {
                errors.push(format!("Duplicate trackable tag: '{name}'."));
            }
        }

        let mut seen_void = HashSet::new();
        for name in &self.void_tags {
            if name.trim().is_empty() {
                errors.push("A void tag name is empty.".to_string());
            } else if !seen_void.insert(name.to_ascii_lowercase()) {
                errors.push(format!("Duplicate void tag: '{name}'."));
            }
        }

        for name in seen_trackable.intersection(&seen_void) {
            errors.push(format!(
                "Tag '{name}' is both trackable and void; void elements cannot be balanced."
            ));
        }

        for (i, fixup) in self.fixups.iter().enumerate() {
            if fixup.pattern.is_empty() {
                errors.push(format!("Fixup entry {i} has an empty pattern."));
                continue;
            }
            for (j, later) in self.fixups.iter().enumerate().skip(i + 1) {
                if later.pattern.starts_with(&fixup.pattern) {
                    errors.push(format!(
                        "Fixup pattern {:?} (entry {i}) shadows later pattern {:?} (entry {j}); \
                         order longer patterns first.",
                        fixup.pattern, later.pattern
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(MendError::ConfigValidation(errors.join("\n")).into())
        }
    }

    /// The trackable set, lowercased for case-insensitive matching.
    pub fn trackable_set(&self) -> HashSet<String> {
        self.trackable_tags
            .iter()
            .map(|t| t.to_ascii_lowercase())
            .collect()
    }

    /// The void set, lowercased for case-insensitive matching.
    pub fn void_set(&self) -> HashSet<String> {
        self.void_tags.iter().map(|t| t.to_ascii_lowercase()).collect()
    }
}

/// Merges a user-supplied configuration over the defaults.
///
/// Non-empty user lists replace the corresponding default list wholesale
/// (a user who names trackable tags is choosing the full set, not adding
/// to it); `escape_text` is always taken from the user config, whose
/// absent-field default is `true`.
pub fn merge_configs(default_config: RepairConfig, user_config: Option<RepairConfig>) -> RepairConfig {
    let Some(user) = user_config else {
        return default_config;
    };
    debug!(
        "Merging user config over defaults ({} trackable, {} void, {} fixups from user).",
        user.trackable_tags.len(),
        user.void_tags.len(),
        user.fixups.len()
    );

    let mut merged = default_config;
    if !user.trackable_tags.is_empty() {
        merged.trackable_tags = user.trackable_tags;
    }
    if !user.void_tags.is_empty() {
        merged.void_tags = user.void_tags;
    }
    if !user.fixups.is_empty() {
        merged.fixups = user.fixups;
    }
    merged.escape_text = user.escape_text;
    merged
}
