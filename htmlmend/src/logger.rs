// htmlmend/src/logger.rs
//! Logger initialization for the CLI.
//!
//! License: MIT OR Apache-2.0

use std::sync::Once;

use env_logger::{Builder, Target};
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// A `Some(level)` overrides whatever `RUST_LOG` says; `None` keeps the
/// environment's configuration. Safe to call repeatedly (tests do).
pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = Builder::from_default_env();
        if let Some(level) = level {
            builder.filter_level(level);
        }
        builder.format_timestamp(None).target(Target::Stderr);
        let _ = builder.try_init();
    });
}
