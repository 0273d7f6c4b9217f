// htmlmend/src/lib.rs
//! # htmlmend CLI Application
//!
//! This crate provides the command-line interface for the htmlmend repair
//! engine: document discovery, backup-and-write persistence, run reports,
//! and the `repair`/`check` commands. The repair logic itself lives in
//! `htmlmend-core`.
//!
//! License: MIT OR Apache-2.0

pub mod cli;
pub mod commands;
pub mod logger;
pub mod walk;
