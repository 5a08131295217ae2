//! Tally - `let` declarations over integer arithmetic
//!
//! # Overview
//!
//! A program is a sequence of declarations such as `let x: int = 5;` or
//! `let y = 2+3*4;`. Each right-hand side is a chain of integer literals and
//! the operators `+ - * /`, grouped to the right with no precedence, so
//! `2+3*4` is `2 + (3 * 4)` and `2*3+4` is `2 * (3 + 4)`.
//!
//! Running a program scans it, parses it and evaluates every declaration in
//! source order. Each stage finishes before the next starts.
//!
//! # Quick Start
//!
//! ```
//! use tally::run;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let bindings = run(&arena, "let x: int = 5;\nlet y = 2+3*4;").unwrap();
//!
//! assert_eq!(bindings[0].to_string(), "Var x: 5");
//! assert_eq!(bindings[1].to_string(), "Var y: 14");
//! ```
//!
//! # Errors
//!
//! Every failure carries the 1-based line where it happened. Use
//! [`render_error`] and friends for a report with the offending source line:
//!
//! ```
//! use tally::{render_error_to_string_no_color, run};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let err = run(&arena, "let x = 10 / 0;").unwrap_err();
//! assert!(render_error_to_string_no_color(&err).contains("Division by zero"));
//! ```

// Re-export public API from tally_core
pub use tally_core::api::{
    CompilationOptions, Diagnostic, Engine, EngineOptions, Error, ExecutionOptions, RelatedInfo,
    Severity, run,
};
pub use tally_core::evaluator::Binding;
pub use tally_core::parser::{Program, Span};

// Stage modules for callers that drive the pipeline by hand
pub use tally_core::{evaluator, parser, scanner};

pub mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
