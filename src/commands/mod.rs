//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod fingerprint;
pub mod inspect;
pub mod utils;

// Re-export main command functions
pub use fingerprint::{execute_fingerprint, validate_args, FingerprintArgs};
pub use inspect::{describe_lines, execute_inspect};
pub use utils::{display_schema, display_version, validate_report_file};
