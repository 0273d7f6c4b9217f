// htmlmend-core/src/errors.rs
//! Custom error types for the htmlmend-core library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// All error types the `htmlmend-core` library can produce.
///
/// `#[non_exhaustive]` signals that new variants may appear in future
/// versions, so consumers cannot match exhaustively and break.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MendError {
    #[error("Repair configuration is invalid: {0}")]
    ConfigValidation(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
