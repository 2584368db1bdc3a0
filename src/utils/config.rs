//! Configuration and constants for fingerprinting.
//!
//! Everything here is read-only for the lifetime of the process.

/// Current crash report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Package prefixes whose frames are runtime/framework noise.
///
/// A declaring class starting with any of these is skipped.
pub const UNPERTINENT_PACKAGES: &[&str] = &[
    "java.",
    "javax.",
    "android.",
    "com.android.internal.",
    "dalvik.system.",
];

// Token markers embedded in the raw fingerprint
pub const SEPARATOR: char = '/';
pub const METHOD_PREFIX: char = '#';
pub const LINE_NUMBER_PREFIX: char = '@';
pub const CAUSE_PREFIX: char = '<';

/// Literal prefix that opens a nested cause in `printStackTrace()` output
pub const CAUSED_BY_PREFIX: &str = "Caused by: ";

/// Length of a hex-encoded SHA-1 digest
pub const DIGEST_HEX_LEN: usize = 40;
