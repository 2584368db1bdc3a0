use crate::output::read_report;
use crate::utils::config::{REPORT_SCHEMA_VERSION, UNPERTINENT_PACKAGES};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a crash report JSON file
///
/// Checks a single file against the report schema; nothing is looked up or stored.
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)
        .with_context(|| format!("Invalid report {}", file_path.display()))?;

    println!("✓ Valid crash report JSON");
    println!("  Version: {}", report.version);
    println!("  Fingerprint: {}", report.fingerprint);
    println!("  Pertinent Frames: {}", report.summary.pertinent_frames);
    println!("  Causes: {}", report.summary.causes);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Java Crash ID Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  fingerprint: string       - SHA-1 digest, 40 lowercase hex chars");
        println!("  raw_fingerprint: string   - Undigested canonical string");
        println!("  summary: object           - Line classification counts");
        println!("    logical_lines: number   - Non-blank lines, header included");
        println!("    pertinent_frames: number - Frames in the fingerprint");
        println!("    discarded_frames: number - Runtime/framework frames skipped");
        println!("    causes: number          - 'Caused by:' lines");
        println!("    noise_lines: number     - Unrecognised lines");
        println!("  source: string?           - File path or 'stdin'");
        println!("  generated_at: string      - ISO 8601 timestamp");
        println!();
        println!("Skipped packages: {}", UNPERTINENT_PACKAGES.join(", "));
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Java Crash ID v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Stable fingerprints for Android and JVM crash stack traces.");
}
