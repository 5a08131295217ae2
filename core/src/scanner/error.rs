use thiserror::Error;

use crate::String;
use crate::api::{Diagnostic, Severity};
use crate::parser::Span;
use crate::{format, vec};

/// Lexical errors. The first one aborts the scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("line {line}: unrecognized character {character:?}")]
    UnrecognizedCharacter {
        line: u32,
        character: char,
        span: Span,
    },

    #[error("line {line}: integer literal `{text}` out of range")]
    LiteralOutOfRange { line: u32, text: String, span: Span },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnrecognizedCharacter { line, .. }
            | LexError::LiteralOutOfRange { line, .. } => *line,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            LexError::UnrecognizedCharacter { span, .. }
            | LexError::LiteralOutOfRange { span, .. } => span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match self {
            LexError::UnrecognizedCharacter { character, .. } => (
                format!("Unrecognized character {:?}", character),
                "L001",
                vec![],
            ),
            LexError::LiteralOutOfRange { text, .. } => (
                format!("Integer literal `{}` out of range", text),
                "L002",
                vec![format!("Integer literals must not exceed {}", i64::MAX)],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            line: self.line(),
            span: self.span().clone(),
            related: vec![],
            help,
            code: Some(code.into()),
        }
    }
}
