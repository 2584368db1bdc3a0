//! Fingerprint assembly.
//!
//! This module handles:
//! - Concatenating the header and canonical frame/cause tokens
//! - Reducing the raw fingerprint to a SHA-1 hex digest
//! - Counting what was kept and dropped along the way

pub mod assembler;
pub mod digest;

// Re-export main functions
pub use assembler::{
    fingerprint, fingerprint_throwable, raw_fingerprint, summarize, FingerprintSummary,
};
pub use digest::{digest_hex, is_digest};
