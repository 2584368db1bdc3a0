//! Error types for the I/O surface of the crate.
//!
//! Fingerprinting itself is total and never fails. We use `thiserror` for the
//! library-style errors around reading traces and writing reports, and `anyhow`
//! for application-level propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading a stack trace
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read trace: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid crash report: {0}")]
    InvalidReport(String),
}
