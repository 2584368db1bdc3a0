//! Stack trace parsing.
//!
//! This module handles:
//! - Splitting raw `printStackTrace()` text into logical lines
//! - Classifying lines as cause markers, stack frames or noise
//! - Building a structured throwable with its cause chain
//! - Reading trace text from files or stdin

pub mod frame;
pub mod input;
pub mod throwable;
pub mod tokenizer;

// Re-export main types
pub use frame::{classify, is_pertinent_class, CauseMarker, StackFrame, TraceLine};
pub use input::{read_trace, validate_input_path};
pub use throwable::{parse_throwable, Chain, Throwable};
pub use tokenizer::tokenize;
