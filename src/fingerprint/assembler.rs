//! Builds fingerprints from raw stack trace text.
//!
//! Output layout: the header verbatim, then for every retained line in order
//! either `/class#method@line` (application frame) or `<cause header`
//! (nested exception). Framework frames and unrecognised lines add nothing.
//!
//! Example:
//! ```text
//! java.lang.NullPointerException: msg
//!     at com.example.Foo.bar(Foo.java:10)
//!     at java.lang.Thread.run(Thread.java:920)
//! ```
//! becomes `java.lang.NullPointerException: msg/com.example.Foo#bar@10`.

use super::digest::digest_hex;
use crate::parser::{classify, tokenize, Throwable, TraceLine};
use crate::utils::config::CAUSE_PREFIX;
use log::debug;
use serde::{Deserialize, Serialize};

/// Compute the fingerprint of a stack trace
///
/// **Public** - main entry point of the crate
///
/// # Arguments
/// * `throwable` - Full `printStackTrace()` text
/// * `raw` - Return the undigested canonical string instead of its hash
///
/// # Returns
/// 40 lowercase hex characters (or the raw string when `raw` is set).
/// An empty string means no fingerprint is available; it is never hashed.
pub fn fingerprint(throwable: &str, raw: bool) -> String {
    finish(assemble(throwable), raw)
}

/// Undigested canonical string, mostly useful for debugging
pub fn raw_fingerprint(throwable: &str) -> String {
    fingerprint(throwable, true)
}

/// Compute the fingerprint of an already structured throwable
///
/// **Public** - gives the same result as [`fingerprint`] on the text the
/// throwable was parsed from
pub fn fingerprint_throwable(throwable: &Throwable, raw: bool) -> String {
    let mut output = String::new();

    for (depth, current) in throwable.chain().enumerate() {
        if depth > 0 {
            output.push(CAUSE_PREFIX);
        }
        output.push_str(&current.header);

        for frame in current.frames.iter().filter(|f| f.is_pertinent()) {
            frame.write_canonical(&mut output);
        }
    }

    finish(output, raw)
}

/// Counts collected while classifying a trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintSummary {
    /// Non-blank lines, header included
    pub logical_lines: usize,

    /// Frames that made it into the fingerprint
    pub pertinent_frames: usize,

    /// Runtime/framework frames that were skipped
    pub discarded_frames: usize,

    /// `Caused by:` lines
    pub causes: usize,

    /// Lines matching nothing
    pub noise_lines: usize,
}

/// Classify every line of a trace and count the outcomes
pub fn summarize(throwable: &str) -> FingerprintSummary {
    let lines = tokenize(throwable);
    let mut summary = FingerprintSummary {
        logical_lines: lines.len(),
        ..Default::default()
    };

    for line in lines.iter().skip(1) {
        match classify(line) {
            TraceLine::Cause(_) => summary.causes += 1,
            TraceLine::PertinentFrame(_) => summary.pertinent_frames += 1,
            TraceLine::UnpertinentFrame(_) => summary.discarded_frames += 1,
            TraceLine::Noise => summary.noise_lines += 1,
        }
    }

    summary
}

/// Build the raw fingerprint string
///
/// **Private** - shared by [`fingerprint`] and [`raw_fingerprint`]
fn assemble(throwable: &str) -> String {
    let lines = tokenize(throwable);

    let Some((header, rest)) = lines.split_first() else {
        debug!("No logical lines in trace, no fingerprint available");
        return String::new();
    };

    let mut output = String::with_capacity(throwable.len());
    output.push_str(header);

    for line in rest {
        append_line(&classify(line), &mut output);
    }

    output
}

/// Append the fragments contributed by one classified line
///
/// **Private** - internal helper for assemble
fn append_line(line: &TraceLine, output: &mut String) {
    match line {
        TraceLine::Cause(marker) => {
            output.push(CAUSE_PREFIX);
            output.push_str(&marker.cause_header);
        }
        TraceLine::PertinentFrame(frame) => frame.write_canonical(output),
        TraceLine::UnpertinentFrame(_) | TraceLine::Noise => {}
    }
}

/// Digest the raw fingerprint unless asked for it as-is
///
/// **Private** - the empty case is passed through unhashed
fn finish(raw_fingerprint: String, raw: bool) -> String {
    if raw || raw_fingerprint.is_empty() {
        raw_fingerprint
    } else {
        digest_hex(&raw_fingerprint)
    }
}
