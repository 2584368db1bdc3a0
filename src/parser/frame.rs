//! Line classification and canonical frame tokens.
//!
//! Every line after the exception header is exactly one of:
//! - a cause marker (`Caused by: ...`)
//! - a stack frame in an application package
//! - a stack frame in a runtime/framework package
//! - noise (`... 12 more`, `Suppressed:`, frames without a line number, etc.)
//!
//! No line carries state to the next one.

use crate::utils::config::{
    CAUSED_BY_PREFIX, LINE_NUMBER_PREFIX, METHOD_PREFIX, SEPARATOR, UNPERTINENT_PACKAGES,
};
use log::trace;
use regex::Regex;
use std::sync::OnceLock;

/// Stack frame pattern, e.g. `at com.example.Foo$Inner.bar(Foo.java:10)`
static FRAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get the compiled stack frame regex pattern
fn frame_regex() -> &'static Regex {
    FRAME_REGEX.get_or_init(|| {
        // Unanchored so that any leading text before `at ` is accepted.
        // The lazy class capture leaves the last dotted segment to the method.
        Regex::new(r"(?i:at) ([a-zA-Z0-9$_.]+?)\.([a-zA-Z0-9_]+)\([a-zA-Z0-9_.]+:([0-9]+)\)")
            .expect("Failed to compile stack frame regex")
    })
}

/// A single frame of a Java stack trace
///
/// **Public** - produced by the classifier and stored in [`Throwable`](super::Throwable)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Fully qualified class, may contain `$` for nested classes
    pub declaring_class: String,

    /// Method name
    pub method_name: String,

    /// Line number exactly as written in the trace
    pub line_number: String,
}

impl StackFrame {
    /// Create a new stack frame
    pub fn new(
        declaring_class: impl Into<String>,
        method_name: impl Into<String>,
        line_number: impl Into<String>,
    ) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            method_name: method_name.into(),
            line_number: line_number.into(),
        }
    }

    /// Parse a frame from a logical line
    ///
    /// Returns `None` when the line does not look like
    /// `at package.Class.method(File.java:NN)`.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = frame_regex().captures(line)?;

        Some(Self::new(&caps[1], &caps[2], &caps[3]))
    }

    /// Whether the declaring class lives outside the runtime/framework packages
    pub fn is_pertinent(&self) -> bool {
        is_pertinent_class(&self.declaring_class)
    }

    /// Append the canonical `/class#method@line` tokens to `output`
    pub fn write_canonical(&self, output: &mut String) {
        output.push(SEPARATOR);
        output.push_str(&self.declaring_class);
        output.push(METHOD_PREFIX);
        output.push_str(&self.method_name);
        output.push(LINE_NUMBER_PREFIX);
        output.push_str(&self.line_number);
    }
}

/// A `Caused by: ` line opening a nested exception
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseMarker {
    /// Class name and message of the nested exception
    pub cause_header: String,
}

impl CauseMarker {
    /// Parse a cause marker, `None` unless the line starts with `Caused by: `
    pub fn parse(line: &str) -> Option<Self> {
        line.strip_prefix(CAUSED_BY_PREFIX).map(|rest| Self {
            cause_header: rest.to_string(),
        })
    }
}

/// Classification of one logical line below the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLine {
    Cause(CauseMarker),
    PertinentFrame(StackFrame),
    UnpertinentFrame(StackFrame),
    Noise,
}

/// Classify a logical line
///
/// **Public** - per-line step of fingerprint assembly
///
/// The cause prefix is checked first; a cause line is never also
/// matched against the frame pattern.
pub fn classify(line: &str) -> TraceLine {
    if let Some(marker) = CauseMarker::parse(line) {
        return TraceLine::Cause(marker);
    }

    match StackFrame::parse(line) {
        Some(frame) if frame.is_pertinent() => TraceLine::PertinentFrame(frame),
        Some(frame) => TraceLine::UnpertinentFrame(frame),
        None => {
            trace!("Ignoring line: {}", line);
            TraceLine::Noise
        }
    }
}

/// Check a declaring class against the unpertinent package list
pub fn is_pertinent_class(class_name: &str) -> bool {
    !UNPERTINENT_PACKAGES
        .iter()
        .any(|package| class_name.starts_with(package))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_frame() {
        let frame = StackFrame::parse("at com.example.Foo.bar(Foo.java:10)").unwrap();
        assert_eq!(frame, StackFrame::new("com.example.Foo", "bar", "10"));
    }

    #[test]
    fn test_parse_nested_class_frame() {
        let frame =
            StackFrame::parse("at com.example.Foo$Inner$1.on_click(Foo.java:1234)").unwrap();
        assert_eq!(frame.declaring_class, "com.example.Foo$Inner$1");
        assert_eq!(frame.method_name, "on_click");
        assert_eq!(frame.line_number, "1234");
    }

    #[test]
    fn test_parse_keeps_line_number_text() {
        let frame = StackFrame::parse("at a.B.c(B.java:007)").unwrap();
        assert_eq!(frame.line_number, "007");
    }

    #[test]
    fn test_parse_with_leading_text() {
        let frame = StackFrame::parse("E/AndroidRuntime( 123):   at com.example.A.b(A.kt:5)").unwrap();
        assert_eq!(frame, StackFrame::new("com.example.A", "b", "5"));
    }

    #[test]
    fn test_parse_rejects_frames_without_line_numbers() {
        assert!(StackFrame::parse("at java.lang.reflect.Method.invoke(Native Method)").is_none());
        assert!(StackFrame::parse("at com.example.A.b(Unknown Source)").is_none());
        assert!(StackFrame::parse("at com.example.A.<init>(A.java:3)").is_none());
        assert!(StackFrame::parse("... 12 more").is_none());
    }

    #[test]
    fn test_cause_marker() {
        let marker = CauseMarker::parse("Caused by: java.io.IOException: disk full").unwrap();
        assert_eq!(marker.cause_header, "java.io.IOException: disk full");
        assert!(CauseMarker::parse("caused by: java.io.IOException").is_none());
        assert!(CauseMarker::parse("Caused by:java.io.IOException").is_none());
    }

    #[test]
    fn test_is_pertinent_class() {
        assert!(!is_pertinent_class("java.lang.Thread"));
        assert!(!is_pertinent_class("javax.net.ssl.SSLSocket"));
        assert!(!is_pertinent_class("android.os.Handler"));
        assert!(!is_pertinent_class("com.android.internal.os.ZygoteInit"));
        assert!(!is_pertinent_class("dalvik.system.NativeStart"));
        assert!(is_pertinent_class("com.android.volley.Request"));
        assert!(is_pertinent_class("javafoo.Bar"));
        assert!(is_pertinent_class("com.example.Foo"));
    }

    #[test]
    fn test_classify() {
        assert!(matches!(
            classify("Caused by: at com.example.A.b(A.java:1)"),
            TraceLine::Cause(_)
        ));
        assert!(matches!(
            classify("at com.example.A.b(A.java:1)"),
            TraceLine::PertinentFrame(_)
        ));
        assert!(matches!(
            classify("at android.app.Activity.performCreate(Activity.java:8000)"),
            TraceLine::UnpertinentFrame(_)
        ));
        assert_eq!(classify("... 3 more"), TraceLine::Noise);
    }

    #[test]
    fn test_write_canonical() {
        let mut output = String::new();
        StackFrame::new("com.example.Foo", "bar", "10").write_canonical(&mut output);
        assert_eq!(output, "/com.example.Foo#bar@10");
    }
}
