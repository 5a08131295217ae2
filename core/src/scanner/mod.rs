//! Lexical scanner.
//!
//! Turns program text into a flat token vector ending in exactly one
//! [`TokenKind::Eof`]. The scanner classifies lexemes and nothing more: it
//! accepts operators the parser never uses (`~`, `<<`, `=>`, ...) and leaves
//! rejecting them to the grammar.
//!
//! ```
//! use tally_core::scanner::{scan, TokenKind};
//!
//! let tokens = scan("let x: int = 5;").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Identifier("x"),
//!         TokenKind::Colon,
//!         TokenKind::TypeInt,
//!         TokenKind::Equal,
//!         TokenKind::IntLiteral(5),
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

mod error;
#[allow(clippy::module_inception)]
mod scanner;
mod token;

pub use error::LexError;
pub use scanner::{Scanner, scan};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod scanner_test;
