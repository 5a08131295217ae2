use core::fmt;

use crate::parser::{BinaryOp, Span, syntax::AnnotatedSource};

/// A parsed program: declarations in source order plus the span table for
/// every expression node. Everything lives in the parse arena.
#[derive(Debug)]
pub struct Program<'a> {
    pub decls: &'a [VarDecl<'a>],
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> Program<'a> {
    pub fn source(&self) -> &'a str {
        self.ann.source
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// `let <name> [: int] = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl<'a> {
    pub name: &'a str,
    pub value: &'a Expr<'a>,
    /// From `let` through the closing `;`.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    IntLiteral(i64),
    /// `right` is `None` when the operand was followed directly by `;`; the
    /// node then stands for `left` alone. The operator travels with the
    /// right operand, so there is no operator without one.
    Binary {
        left: &'a Expr<'a>,
        right: Option<(BinaryOp, &'a Expr<'a>)>,
    },
}

impl<'a> Expr<'a> {
    pub fn as_ptr(&self) -> *const Self {
        self as *const _
    }

    /// `left` alone, with nothing following.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Expr::Binary { right: None, .. })
    }
}

/// Renders the tree with explicit grouping, e.g. `2 + (3 * 4)`.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntLiteral(value) => write!(f, "{}", value),
            Expr::Binary { left, right: None } => write!(f, "{}", left),
            Expr::Binary {
                left,
                right: Some((op, right)),
            } => {
                if matches!(right, Expr::Binary { right: Some(_), .. }) {
                    write!(f, "{} {} ({})", left, op, right)
                } else {
                    write!(f, "{} {} {}", left, op, right)
                }
            }
        }
    }
}

impl fmt::Display for VarDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}
