// htmlmend/src/main.rs
//! htmlmend entry point.
//!
//! Parses the CLI, builds the repair configuration (defaults, optional
//! user file, flag overrides), constructs the engine, and dispatches to
//! the requested command.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use htmlmend::cli::{Cli, Commands};
use htmlmend::commands::{check, repair};
use htmlmend::logger;
use htmlmend_core::{merge_configs, MarkupEngine, RepairConfig};

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.quiet {
        LevelFilter::Off
    } else if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logger::init_logger(Some(level));

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("htmlmend: error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    match args.command {
        Commands::Repair(cmd) => {
            let config = build_config(cmd.config.as_deref(), &cmd.track, cmd.no_escape_text)?;
            let engine = MarkupEngine::new(config)?;
            let opts = repair::RepairOptions {
                root: cmd.root,
                write: cmd.write,
                ext: cmd.ext,
                report_path: cmd.report,
                json_stdout: cmd.json_stdout,
                quiet: args.quiet,
            };
            let _ = repair::run_repair(&engine, opts)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(cmd) => {
            let config = build_config(cmd.config.as_deref(), &cmd.track, cmd.no_escape_text)?;
            let engine = MarkupEngine::new(config)?;
            let opts = check::CheckOptions {
                root: cmd.root,
                ext: cmd.ext,
                fail_over_threshold: cmd.fail_over_threshold,
                report_path: cmd.report,
                json_stdout: cmd.json_stdout,
                quiet: args.quiet,
            };
            let exceeded = check::run_check(&engine, opts)?;
            Ok(if exceeded { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
    }
}

/// Loads defaults, merges an optional user config file, and applies the
/// command-line overrides on top.
fn build_config(
    config_path: Option<&Path>,
    track: &[String],
    no_escape_text: bool,
) -> Result<RepairConfig> {
    let default_config = RepairConfig::load_default()?;
    let user_config = match config_path {
        Some(path) => Some(
            RepairConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
        ),
        None => None,
    };

    let mut config = merge_configs(default_config, user_config);
    if !track.is_empty() {
        config.trackable_tags = track.to_vec();
    }
    if no_escape_text {
        config.escape_text = false;
    }
    Ok(config)
}
