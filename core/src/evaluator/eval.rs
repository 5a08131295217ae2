//! Core evaluation logic.

use alloc::string::ToString;
use tracing::debug;

use crate::{
    Vec,
    evaluator::{
        Binding, EvaluatorOptions, ExecutionError, ExecutionErrorKind,
        ResourceExceededError::StackOverflow,
    },
    parser::{Expr, Program, Span},
};

/// Tree-walking evaluator over a parsed program.
pub struct Evaluator<'p, 'a> {
    options: EvaluatorOptions,
    /// The program being evaluated (used for error context).
    program: &'p Program<'a>,
    depth: usize,
}

impl<'p, 'a> Evaluator<'p, 'a> {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions, program: &'p Program<'a>) -> Self {
        Self {
            options,
            program,
            depth: 0,
        }
    }

    fn add_error_context(&self, expr: &'a Expr<'a>, kind: ExecutionErrorKind) -> ExecutionError {
        // Nodes built by the parser always have a span; fall back to the
        // whole source for hand-built trees.
        let span = self
            .program
            .ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, self.program.source().len()));
        ExecutionError {
            kind,
            line: self.program.ann.line_of(&span),
            span,
            source: self.program.source().to_string(),
        }
    }

    /// Evaluate every declaration in source order.
    pub fn run(&mut self) -> Result<Vec<Binding<'a>>, ExecutionError> {
        let mut bindings = Vec::with_capacity(self.program.len());
        for decl in self.program.decls {
            let value = self.eval_expr(decl.value)?;
            debug!(name = decl.name, value, "evaluated declaration");
            bindings.push(Binding {
                name: decl.name,
                value,
            });
        }
        Ok(bindings)
    }

    /// Evaluate an expression node.
    pub fn eval_expr(&mut self, expr: &'a Expr<'a>) -> Result<i64, ExecutionError> {
        match expr {
            Expr::IntLiteral(value) => Ok(*value),

            // A lone operand stands for itself.
            Expr::Binary { left, right: None } => self.eval_expr(left),

            Expr::Binary {
                left,
                right: Some((op, right)),
            } => {
                let left_val = self.eval_expr(left)?;

                // Check depth before recursing into the tail
                if self.depth >= self.options.max_depth {
                    return Err(self.add_error_context(
                        expr,
                        StackOverflow {
                            depth: self.depth + 1,
                            max_depth: self.options.max_depth,
                        }
                        .into(),
                    ));
                }
                self.depth += 1;
                let right_val = self.eval_expr(right);
                self.depth -= 1;
                let right_val = right_val?;

                super::operators::eval_binary_int(*op, left_val, right_val)
                    .map_err(|e| self.add_error_context(expr, e.into()))
            }
        }
    }
}
