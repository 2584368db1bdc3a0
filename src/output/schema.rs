//! Output JSON schema for crash reports.
//!
//! Schema is versioned to allow future evolution.

use crate::fingerprint::{digest_hex, raw_fingerprint, summarize, FingerprintSummary};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// SHA-1 digest of the raw fingerprint
    pub fingerprint: String,

    /// Undigested canonical string
    pub raw_fingerprint: String,

    /// What the classifier kept and dropped
    pub summary: FingerprintSummary,

    /// Where the trace was read from (file path or "stdin")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Build a report for a trace
///
/// **Public** - used by the fingerprint command
///
/// # Returns
/// `None` when no fingerprint is available for the trace
pub fn build_report(trace: &str, source: Option<String>) -> Option<CrashReport> {
    use chrono::Utc;

    let raw_fingerprint = raw_fingerprint(trace);
    if raw_fingerprint.is_empty() {
        return None;
    }

    Some(CrashReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        fingerprint: digest_hex(&raw_fingerprint),
        raw_fingerprint,
        summary: summarize(trace),
        source,
        generated_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint;

    #[test]
    fn test_build_report() {
        let trace = "java.lang.Error: x\n\tat com.example.A.b(A.java:1)\n";
        let report = build_report(trace, Some("crash.txt".to_string())).unwrap();

        assert_eq!(report.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.raw_fingerprint, "java.lang.Error: x/com.example.A#b@1");
        assert_eq!(report.fingerprint, fingerprint(trace, false));
        assert_eq!(report.summary.pertinent_frames, 1);
        assert_eq!(report.source.as_deref(), Some("crash.txt"));
    }

    #[test]
    fn test_build_report_empty_trace() {
        assert!(build_report("   ", None).is_none());
    }
}
