//! Inspect command: shows how each line of a trace is classified.

use crate::fingerprint::raw_fingerprint;
use crate::parser::{classify, read_trace, tokenize, TraceLine};
use anyhow::{Context, Result};
use std::path::Path;

/// Describe every logical line of a trace, one entry per line
///
/// **Public** - used by execute_inspect and tests
pub fn describe_lines(trace: &str) -> Vec<String> {
    let lines = tokenize(trace);
    let mut described = Vec::with_capacity(lines.len());

    let Some((header, rest)) = lines.split_first() else {
        return described;
    };

    described.push(format!("{:<10}{}", "[header]", header));

    for line in rest {
        let label = match classify(line) {
            TraceLine::Cause(_) => "cause",
            TraceLine::PertinentFrame(_) => "frame",
            TraceLine::UnpertinentFrame(_) => "skipped",
            TraceLine::Noise => "noise",
        };
        described.push(format!("{:<10}{}", format!("[{}]", label), line));
    }

    described
}

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(input: Option<&Path>) -> Result<()> {
    let trace = read_trace(input).context("Failed to read trace")?;

    let described = describe_lines(&trace);
    if described.is_empty() {
        println!("(no stack trace lines)");
        return Ok(());
    }

    for line in &described {
        println!("{}", line);
    }

    println!();
    println!("Raw fingerprint: {}", raw_fingerprint(&trace));

    Ok(())
}
