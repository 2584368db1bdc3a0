//! Fingerprint command implementation.
//!
//! The fingerprint command:
//! 1. Reads the trace from a file or stdin
//! 2. Computes the fingerprint (digest or raw)
//! 3. Optionally writes a JSON crash report

use crate::fingerprint::fingerprint;
use crate::output::{build_report, validate_path, write_report};
use crate::parser::{read_trace, validate_input_path};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the fingerprint command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct FingerprintArgs {
    /// Trace file (None = stdin)
    pub input: Option<PathBuf>,

    /// Print the raw canonical string instead of the digest
    pub raw: bool,

    /// Output path for a JSON crash report (optional)
    pub output_json: Option<PathBuf>,
}

/// Execute the fingerprint command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The printed fingerprint
///
/// # Errors
/// * Input read failures
/// * Traces with no fingerprint available
/// * Report write errors
pub fn execute_fingerprint(args: FingerprintArgs) -> Result<String> {
    let source = args
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let trace = read_trace(args.input.as_deref())
        .with_context(|| format!("Failed to read trace from {}", source))?;

    debug!("Read {} bytes of trace text", trace.len());

    let result = fingerprint(&trace, args.raw);
    if result.is_empty() {
        anyhow::bail!("No fingerprint available: {} contains no stack trace lines", source);
    }

    if let Some(json_path) = &args.output_json {
        let report = build_report(&trace, Some(source))
            .context("No fingerprint available for report")?;

        write_report(&report, json_path).context("Failed to write crash report JSON")?;

        info!("✓ Report written to: {}", json_path.display());
    }

    println!("{}", result);

    Ok(result)
}

/// Validate fingerprint arguments
///
/// **Public** - can be called before execute_fingerprint for early validation
pub fn validate_args(args: &FingerprintArgs) -> Result<()> {
    if let Some(input) = &args.input {
        validate_input_path(input).context("Invalid input file")?;
    }

    if let Some(output) = &args.output_json {
        validate_path(output).context("Invalid report path")?;
    }

    Ok(())
}
