//! Public API for the tally language.
//!
//! Runs a program through the Scanner, Parser and Evaluator and reports
//! either one binding per declaration or a located error.
//!
//! # Example
//!
//! ```
//! use tally_core::api::{Engine, EngineOptions, Error};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let engine = Engine::new(EngineOptions::default());
//!
//! let err = engine.run(&arena, "let x: = 5;").unwrap_err();
//! assert!(matches!(err, Error::Compilation { .. }));
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::{Engine, run};
pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use options::{CompilationOptions, EngineOptions, ExecutionOptions};
