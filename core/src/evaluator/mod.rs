//! Tree-walking evaluator for parsed programs.
//!
//! Reduces each declaration's expression to an `i64` and pairs it with the
//! declared name.
//!
//! ## Design Principles
//!
//! - **Never panic**: overflow wraps and division by zero is an error value
//! - **Stack-safe**: depth tracking bounds recursion on long operator chains
//!
//! ## Example
//!
//! ```
//! use tally_core::{evaluator, parser};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let program = parser::parse(&arena, "let x = 2 + 3 * 4;").unwrap();
//! let bindings = evaluator::evaluate(&program).unwrap();
//! assert_eq!(bindings[0].name, "x");
//! assert_eq!(bindings[0].value, 14);
//! ```

mod error;
mod eval;
mod operators;


use core::fmt;

pub use error::{ExecutionError, ExecutionErrorKind, ResourceExceededError, RuntimeError};
pub use eval::Evaluator;

use crate::{Vec, parser::Program};

/// Options for the evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum number of nested operators evaluated (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// One `(name, value)` result, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    pub name: &'a str,
    pub value: i64,
}

/// Renders the driver's output line, `Var <name>: <value>`.
impl fmt::Display for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var {}: {}", self.name, self.value)
    }
}

/// Evaluate a parsed program with default limits.
pub fn evaluate<'a>(program: &Program<'a>) -> Result<Vec<Binding<'a>>, ExecutionError> {
    Evaluator::new(EvaluatorOptions::default(), program).run()
}

/// Evaluate a parsed program with a custom depth limit.
///
/// ## Example
///
/// ```ignore
/// // Allow longer operator chains for a specific use case
/// let bindings = evaluate_with_limits(&program, 5000)?;
/// ```
pub fn evaluate_with_limits<'a>(
    program: &Program<'a>,
    max_depth: usize,
) -> Result<Vec<Binding<'a>>, ExecutionError> {
    Evaluator::new(EvaluatorOptions { max_depth }, program).run()
}
