//! Structured view of a stack trace with its cause chain.
//!
//! The text fingerprint works line by line; this model is the same data
//! grouped per exception, for callers that hold a parsed trace rather than
//! raw text.

use super::frame::{classify, StackFrame, TraceLine};
use super::tokenizer::tokenize;
use log::debug;

/// One exception of a trace: header, frames and optional nested cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throwable {
    /// Class name and optional message, e.g. `java.lang.NullPointerException: msg`
    pub header: String,

    /// All recognised frames in trace order, framework frames included
    pub frames: Vec<StackFrame>,

    /// Exception this one was caused by
    pub cause: Option<Box<Throwable>>,
}

impl Throwable {
    /// Create a throwable with no frames and no cause
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            frames: Vec::new(),
            cause: None,
        }
    }

    /// Attach a frame, builder style
    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Attach a cause, builder style
    pub fn with_cause(mut self, cause: Throwable) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Iterate over this throwable and its causes, outermost first
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Innermost cause (or `self` when there is none)
    pub fn root_cause(&self) -> &Throwable {
        self.chain().last().unwrap_or(self)
    }
}

/// Iterator over a cause chain, see [`Throwable::chain`]
pub struct Chain<'a> {
    next: Option<&'a Throwable>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Throwable;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause.as_deref();
        Some(current)
    }
}

/// Parse raw trace text into a structured throwable
///
/// **Public** - structured counterpart of the text fingerprint
///
/// The first logical line is the header. Each `Caused by: ` line opens a
/// nested cause, and frames attach to the innermost open exception.
/// Unrecognised lines are dropped.
///
/// # Returns
/// `None` when the trace has no logical lines at all
pub fn parse_throwable(raw: &str) -> Option<Throwable> {
    let lines = tokenize(raw);
    let (header, rest) = lines.split_first()?;

    // Outermost first; folded into nested boxes at the end
    let mut chain = vec![Throwable::new(*header)];

    for line in rest {
        match classify(line) {
            TraceLine::Cause(marker) => chain.push(Throwable::new(marker.cause_header)),
            TraceLine::PertinentFrame(frame) | TraceLine::UnpertinentFrame(frame) => {
                if let Some(current) = chain.last_mut() {
                    current.frames.push(frame);
                }
            }
            TraceLine::Noise => {}
        }
    }

    debug!("Parsed throwable with {} exception(s) in chain", chain.len());

    let mut innermost = chain.pop()?;
    while let Some(mut outer) = chain.pop() {
        outer.cause = Some(Box::new(innermost));
        innermost = outer;
    }

    Some(innermost)
}
