//! Runtime evaluation errors.
//!
//! The parser only builds well-formed trees, so the evaluator has exactly
//! one semantic failure (division by zero) plus the depth guard.
//!
//! # Error Categories
//!
//! - **Runtime errors**: the program asked for something undefined, such as
//!   dividing by zero.
//!
//! - **Resource exceeded errors**: the evaluator refused to go deeper than
//!   its configured limit.

use crate::String;
use crate::api::{Diagnostic, Severity};
use crate::parser::Span;
use crate::{ToString, format, vec};
use core::fmt;
use thiserror::Error;

/// Evaluation error with the location of the failing node.
#[derive(Debug)]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub source: String,
    /// 1-based line on which the failing node starts.
    pub line: u32,
    pub span: Span,
}

#[derive(Debug, Error)]
pub enum ExecutionErrorKind {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceededError),
}

/// Errors raised by the program itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Integer division with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Resource limits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceExceededError {
    /// Evaluation recursion depth exceeded.
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl ExecutionError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ExecutionErrorKind::Runtime(RuntimeError::DivisionByZero) => (
                "R001",
                vec!["The right-hand side of `/` evaluated to 0".to_string()],
            ),
            ExecutionErrorKind::ResourceExceeded(_) => ("R002", vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message: format!("{}", self.kind),
            line: self.line,
            span: self.span.clone(),
            related: vec![],
            help,
            code: Some(code.to_string()),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl core::error::Error for ExecutionError {}
