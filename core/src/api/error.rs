//! Public error types for the tally API.
//!
//! Internal errors (scan, parse, evaluation) are converted to these types at
//! the API boundary. Each carries the source text so renderers can show the
//! offending line without holding on to the arena.

use core::fmt;

use crate::parser::{ParseError, Span};
use crate::{String, ToString, Vec, vec};

/// Public error type for all tally operations.
#[derive(Debug)]
pub enum Error {
    /// Scan or parse failure.
    ///
    /// A program stops at its first error, so there is one diagnostic in
    /// practice. The vector leaves room for tools that collect more.
    Compilation {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// Evaluation failure (division by zero).
    Runtime {
        diagnostic: Diagnostic,
        source: String,
    },

    /// Resource limits exceeded (evaluation depth).
    ResourceExceeded(String),
}

impl Error {
    /// All diagnostics carried by this error, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
            Error::Runtime { diagnostic, .. } => core::slice::from_ref(diagnostic),
            Error::ResourceExceeded(_) => &[],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Compilation { diagnostics, .. } => match diagnostics.first() {
                Some(first) => write!(
                    f,
                    "Compilation failed on line {}: {}",
                    first.line, first.message
                ),
                None => write!(f, "Compilation failed"),
            },
            Error::Runtime { diagnostic, .. } => write!(
                f,
                "Runtime error on line {}: {}",
                diagnostic.line, diagnostic.message
            ),
            Error::ResourceExceeded(msg) => write!(f, "Resource limit exceeded: {}", msg),
        }
    }
}

impl core::error::Error for Error {}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// 1-based line of the primary issue.
    pub line: u32,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Suggestions on how to fix the issue.
    pub help: Vec<String>,

    /// Error code (e.g., "P001").
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g., "in declaration of `x`").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub span: Span,
    pub message: String,
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let diagnostic = err.to_diagnostic();
        Error::Compilation {
            diagnostics: vec![diagnostic],
            source: err.source,
        }
    }
}

impl From<crate::evaluator::ExecutionError> for Error {
    fn from(err: crate::evaluator::ExecutionError) -> Self {
        use crate::evaluator::ExecutionErrorKind::*;
        match &err.kind {
            ResourceExceeded(_) => Error::ResourceExceeded(err.to_string()),
            Runtime(_) => Error::Runtime {
                diagnostic: err.to_diagnostic(),
                source: err.source,
            },
        }
    }
}
