use core::fmt;

use crate::parser::Span;

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    /// 1-based line the lexeme starts on.
    pub line: u32,
    /// Byte range of the lexeme. Empty at the end of input for `Eof`.
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, line: u32, span: Span) -> Self {
        Self { kind, line, span }
    }

    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        self.span.str_of(source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'src> {
    Eof,
    Identifier(&'src str),
    IntLiteral(i64),

    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    Arrow,
    Semicolon,
    Comma,
    Colon,

    Let,
    TypeInt,

    Equal,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    EqualEqual,
    NotEqual,
    Not,

    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    And,
    Or,

    Add,
    Sub,
    Mul,
    Div,
    Mod,
    ShiftLeft,
    ShiftRight,

    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

impl<'src> TokenKind<'src> {
    /// Keyword lookup for an identifier-shaped lexeme.
    pub fn keyword_or_identifier(text: &'src str) -> Self {
        match text {
            "let" => TokenKind::Let,
            "int" => TokenKind::TypeInt,
            _ => TokenKind::Identifier(text),
        }
    }

    /// Fixed spelling of a fieldless token.
    pub fn symbol(&self) -> Option<&'static str> {
        use TokenKind::*;
        let s = match self {
            Eof | Identifier(_) | IntLiteral(_) => return None,
            ParenOpen => "(",
            ParenClose => ")",
            BraceOpen => "{",
            BraceClose => "}",
            Arrow => "=>",
            Semicolon => ";",
            Comma => ",",
            Colon => ":",
            Let => "let",
            TypeInt => "int",
            Equal => "=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            EqualEqual => "==",
            NotEqual => "!=",
            Not => "!",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            BitNot => "~",
            And => "&&",
            Or => "||",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
        };
        Some(s)
    }
}

/// User-facing description, used in "expected X, found Y" messages.
impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Identifier(name) => write!(f, "identifier `{}`", name),
            TokenKind::IntLiteral(value) => write!(f, "integer literal {}", value),
            TokenKind::Let | TokenKind::TypeInt => {
                write!(f, "keyword `{}`", self.symbol().unwrap_or_default())
            }
            other => write!(f, "`{}`", other.symbol().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToString;

    #[test]
    fn test_keywords_are_exact() {
        assert_eq!(TokenKind::keyword_or_identifier("let"), TokenKind::Let);
        assert_eq!(TokenKind::keyword_or_identifier("int"), TokenKind::TypeInt);
        assert_eq!(
            TokenKind::keyword_or_identifier("lets"),
            TokenKind::Identifier("lets")
        );
        assert_eq!(
            TokenKind::keyword_or_identifier("Int"),
            TokenKind::Identifier("Int")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Semicolon.to_string(), "`;`");
        assert_eq!(TokenKind::ShiftLeft.to_string(), "`<<`");
        assert_eq!(TokenKind::Let.to_string(), "keyword `let`");
        assert_eq!(TokenKind::Identifier("x").to_string(), "identifier `x`");
        assert_eq!(TokenKind::IntLiteral(5).to_string(), "integer literal 5");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }
}
