//! The tally pipeline: Scanner, then Parser, then Evaluator.

use bumpalo::Bump;
use tracing::debug;

use super::{EngineOptions, Error};
use crate::Vec;
use crate::evaluator::{Binding, Evaluator};
use crate::parser::{self, Program};

/// Runs programs through the three stages in strict sequence. The whole
/// token stream exists before parsing starts, and the whole tree exists
/// before evaluation starts.
///
/// # Example
///
/// ```
/// use tally_core::api::{Engine, EngineOptions};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let engine = Engine::new(EngineOptions::default());
///
/// let bindings = engine.run(&arena, "let x: int = 5;\nlet y = 2+3*4;").unwrap();
/// let lines: Vec<String> = bindings.iter().map(|b| b.to_string()).collect();
/// assert_eq!(lines, ["Var x: 5", "Var y: 14"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Scan and parse `source`. Nothing is evaluated.
    pub fn compile<'a>(&self, arena: &'a Bump, source: &'a str) -> Result<Program<'a>, Error> {
        let max_depth = self.options.default_compilation_options.max_depth;
        let program = parser::parse_with_max_depth(arena, source, max_depth)?;
        debug!(declarations = program.len(), "compiled program");
        Ok(program)
    }

    /// Evaluate every declaration of an already compiled program.
    pub fn execute<'a>(&self, program: &Program<'a>) -> Result<Vec<Binding<'a>>, Error> {
        let options = (&self.options.default_execution_options).into();
        Ok(Evaluator::new(options, program).run()?)
    }

    /// Compile and execute `source`, returning one binding per declaration.
    pub fn run<'a>(&self, arena: &'a Bump, source: &'a str) -> Result<Vec<Binding<'a>>, Error> {
        let program = self.compile(arena, source)?;
        self.execute(&program)
    }
}

/// Run `source` with default options.
pub fn run<'a>(arena: &'a Bump, source: &'a str) -> Result<Vec<Binding<'a>>, Error> {
    Engine::default().run(arena, source)
}
