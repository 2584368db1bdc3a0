//! Java Crash ID
//!
//! Stable, deduplicating fingerprints for crash reports emitted by
//! Android and JVM runtimes, computed from the textual stack trace alone.
//!
//! Crashes that are the same bug get the same fingerprint even when
//! unrelated runtime or framework frames differ. Frames in application
//! packages, their line numbers and the cause chain are what count.
//!
//! ## Getting Started
//!
//! ```
//! let trace = "java.lang.NullPointerException: msg
//!     at com.example.Foo.bar(Foo.java:10)
//!     at java.lang.Thread.run(Thread.java:920)";
//!
//! assert_eq!(
//!     java_crash_id::fingerprint(trace, true),
//!     "java.lang.NullPointerException: msg/com.example.Foo#bar@10"
//! );
//! assert_eq!(java_crash_id::fingerprint(trace, false).len(), 40);
//! ```

pub mod commands;
pub mod fingerprint;
pub mod output;
pub mod parser;
pub mod utils;

pub use fingerprint::{fingerprint, fingerprint_throwable, raw_fingerprint};
pub use parser::{parse_throwable, StackFrame, Throwable};
