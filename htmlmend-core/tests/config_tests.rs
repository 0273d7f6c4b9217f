// htmlmend-core/tests/config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use htmlmend_core::config::{merge_configs, RepairConfig};

#[test]
fn test_load_default_config() {
    let config = RepairConfig::load_default().unwrap();
    assert_eq!(config.trackable_tags, vec!["div".to_string()]);
    assert_eq!(config.void_tags.len(), 14);
    assert!(config.escape_text);
    // The em-dash mojibake entry is present and maps to the real character.
    let em_dash = config
        .fixups
        .iter()
        .find(|f| f.pattern == "\u{e2}\u{20ac}\u{201d}")
        .unwrap();
    assert_eq!(em_dash.replace_with, "—");
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
trackable_tags:
  - div
  - section
void_tags:
  - br
escape_text: false
fixups:
  - pattern: "abc"
    replace_with: "x"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = RepairConfig::load_from_file(file.path())?;
    assert_eq!(config.trackable_tags, vec!["div".to_string(), "section".to_string()]);
    assert_eq!(config.void_tags, vec!["br".to_string()]);
    assert!(!config.escape_text);
    assert_eq!(config.fixups.len(), 1);
    Ok(())
}

#[test]
fn test_load_from_file_defaults_for_omitted_fields() -> Result<()> {
    // escape_text omitted defaults to true; lists default to empty.
    let yaml_content = "trackable_tags: [article]\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = RepairConfig::load_from_file(file.path())?;
    assert!(config.escape_text);
    assert!(config.void_tags.is_empty());
    assert!(config.fixups.is_empty());
    Ok(())
}

#[test]
fn test_load_from_file_rejects_shadowing_table() -> Result<()> {
    let yaml_content = r#"
fixups:
  - { pattern: "ab", replace_with: "1" }
  - { pattern: "abc", replace_with: "2" }
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = RepairConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("shadows"));
    Ok(())
}

#[test]
fn test_load_from_missing_file_reports_path() {
    let err = RepairConfig::load_from_file("/nonexistent/mend.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/mend.yaml"));
}

#[test]
fn test_merge_user_lists_replace_defaults() -> Result<()> {
    let default_config = RepairConfig::load_default()?;
    let yaml_content = "trackable_tags: [section, article]\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let user = RepairConfig::load_from_file(file.path())?;

    let merged = merge_configs(default_config.clone(), Some(user));
    assert_eq!(
        merged.trackable_tags,
        vec!["section".to_string(), "article".to_string()]
    );
    // Untouched sections keep the defaults.
    assert_eq!(merged.void_tags, default_config.void_tags);
    assert_eq!(merged.fixups, default_config.fixups);
    Ok(())
}
