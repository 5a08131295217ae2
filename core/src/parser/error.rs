use alloc::string::ToString;
use core::fmt;

use crate::api::{Diagnostic, Severity};
use crate::diagnostics::context::Context;
use crate::parser::Span;
use crate::scanner::LexError;
use crate::{String, Vec, format, vec};

/// Parser error with context
#[derive(Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    /// 1-based line of the offending token.
    pub line: u32,
    pub span: Span,
    pub context: Vec<Context>,
}

/// Specific kinds of parse errors
#[derive(Debug)]
pub enum ParseErrorKind {
    /// Scanning failed before parsing could start
    Lex(LexError),
    /// Unexpected token at a grammar decision point
    UnexpectedToken { expected: Expected, found: String },
    /// Operator chain longer than the configured limit
    MaxDepthExceeded { depth: usize, max_depth: usize },
}

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// `let` or end of input at the top level.
    Declaration,
    /// Variable name after `let`.
    Identifier,
    /// `:` or `=` after the variable name.
    TypeAnnotation,
    /// `int` after `:`.
    TypeName,
    /// `=` after the type annotation.
    Assignment,
    /// Integer literal operand.
    Value,
    /// Operator or `;` after an operand.
    Terminator,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Expected::Declaration => "declaration",
            Expected::Identifier => "identifier",
            Expected::TypeAnnotation => "`:` or `=`",
            Expected::TypeName => "type `int`",
            Expected::Assignment => "`=`",
            Expected::Value => "integer literal",
            Expected::Terminator => "operator or `;`",
        };
        f.write_str(s)
    }
}

impl ParseError {
    /// Create a new ParseError with no context
    pub fn new(kind: ParseErrorKind, source: String, line: u32, span: Span) -> Self {
        Self {
            kind,
            source,
            line,
            span,
            context: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context.push(context);
        self
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::Lex(err) => return err.to_diagnostic(),
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("Expected {}, found {}", expected, found),
                Some("P001"),
                help_for(*expected),
            ),
            ParseErrorKind::MaxDepthExceeded { max_depth, .. } => (
                format!(
                    "Expression nesting depth exceeds maximum of {} levels",
                    max_depth
                ),
                Some("P004"),
                vec!["Split the expression across several declarations".to_string()],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            line: self.line,
            span: self.span.clone(),
            related: self
                .context
                .iter()
                .map(|ctx| ctx.to_related_info())
                .collect(),
            help,
            code: code.map(|s| s.to_string()),
        }
    }
}

fn help_for(expected: Expected) -> Vec<String> {
    let help = match expected {
        Expected::Declaration => "Every statement starts with `let`",
        Expected::TypeName => "`int` is the only type; write `: int` or drop the annotation",
        Expected::Value => "Operands must be integer literals",
        Expected::Terminator => "End the declaration with `;`",
        Expected::Identifier | Expected::TypeAnnotation | Expected::Assignment => {
            return vec![];
        }
    };
    vec![help.to_string()]
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(
            f,
            "{} on line {}: {}",
            diagnostic.severity, diagnostic.line, diagnostic.message
        )?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &diagnostic.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

impl core::error::Error for ParseError {}

impl ParseError {
    pub(crate) fn from_lex(err: LexError, source: &str) -> Self {
        let line = err.line();
        let span = err.span().clone();
        ParseError::new(ParseErrorKind::Lex(err), source.to_string(), line, span)
    }
}
