pub mod error;
mod parsed_expr;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser entry points for external use
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse, parse_tokens, parse_with_max_depth};

pub use error::{Expected, ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, Program, VarDecl};
pub use syntax::AnnotatedSource;
pub use syntax::{BinaryOp, Span};
