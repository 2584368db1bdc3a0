//! Output writers for crash reports.
//!
//! This module handles:
//! - The versioned JSON report schema
//! - Writing and reading reports on disk

pub mod json;
pub mod schema;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_path, write_report};
pub use schema::{build_report, CrashReport};
