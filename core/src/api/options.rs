//! Configuration options for the tally engine.

use crate::{evaluator::EvaluatorOptions, parser::DEFAULT_MAX_DEPTH};

/// Configuration options for scanning and parsing.
///
/// # Example
///
/// ```
/// use tally_core::api::CompilationOptions;
///
/// let options = CompilationOptions { max_depth: 200 };
/// ```
#[derive(Debug, Clone)]
pub struct CompilationOptions {
    /// Maximum number of operators in one expression.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for evaluation.
///
/// # Example
///
/// ```
/// use tally_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { max_depth: 500 };
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Maximum evaluation depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_depth: EvaluatorOptions::default().max_depth,
        }
    }
}

impl From<&ExecutionOptions> for EvaluatorOptions {
    fn from(options: &ExecutionOptions) -> Self {
        EvaluatorOptions {
            max_depth: options.max_depth,
        }
    }
}

/// Configuration options for the tally engine.
///
/// # Example
///
/// ```
/// use tally_core::api::{EngineOptions, CompilationOptions, ExecutionOptions};
///
/// let options = EngineOptions {
///     default_compilation_options: CompilationOptions::default(),
///     default_execution_options: ExecutionOptions { max_depth: 500 },
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub default_compilation_options: CompilationOptions,
    pub default_execution_options: ExecutionOptions,
}
