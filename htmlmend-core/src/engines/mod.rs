// htmlmend-core/src/engines/mod.rs
//! Concrete implementations of the [`crate::engine::RepairEngine`] trait.
//!
//! License: MIT OR Apache-2.0

pub mod markup_engine;
