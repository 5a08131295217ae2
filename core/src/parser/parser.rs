use alloc::string::ToString;
use bumpalo::Bump;
use tracing::{debug, trace};

use crate::diagnostics::context::Context;
use crate::parser::{
    AnnotatedSource, BinaryOp, Expected, Expr, ParseError, ParseErrorKind, Program, Span,
    VarDecl,
};
use crate::scanner::{Token, TokenKind, scan};
use crate::{Vec, format};

/// Default bound on the number of operators in one expression.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Scan and parse `source` with the default depth limit.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<Program<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Scan and parse `source`, failing if an expression chains more than
/// `max_depth` operators.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<Program<'a>, ParseError> {
    let tokens = scan(source).map_err(|e| ParseError::from_lex(e, source))?;
    Parser::new(arena, source, &tokens, max_depth).program()
}

/// Parse an already scanned token stream.
pub fn parse_tokens<'a>(
    arena: &'a Bump,
    source: &'a str,
    tokens: &[Token<'a>],
) -> Result<Program<'a>, ParseError> {
    Parser::new(arena, source, tokens, DEFAULT_MAX_DEPTH).program()
}

/// Recursive-descent parser with one token of lookahead and no backtracking.
pub struct Parser<'a, 't> {
    arena: &'a Bump,
    source: &'a str,
    tokens: &'t [Token<'a>],
    pos: usize,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
    max_depth: usize,
    depth: usize,
}

impl<'a, 't> Parser<'a, 't> {
    pub fn new(
        arena: &'a Bump,
        source: &'a str,
        tokens: &'t [Token<'a>],
        max_depth: usize,
    ) -> Self {
        Self {
            arena,
            source,
            tokens,
            pos: 0,
            ann: arena.alloc(AnnotatedSource::new(arena, source)),
            max_depth,
            depth: 0,
        }
    }

    /// `program := decl* EOF`
    pub fn program(mut self) -> Result<Program<'a>, ParseError> {
        let mut decls = Vec::new();
        loop {
            let tok = self.advance();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::Let => decls.push(self.declaration(&tok)?),
                _ => return Err(self.unexpected(Expected::Declaration, &tok)),
            }
        }
        debug!(count = decls.len(), "parse complete");

        Ok(Program {
            decls: self.arena.alloc_slice_fill_iter(decls),
            ann: self.ann,
        })
    }

    /// `decl := 'let' IDENT (':' 'int')? '=' expr`, where `expr` consumes the `;`.
    fn declaration(&mut self, let_tok: &Token<'a>) -> Result<VarDecl<'a>, ParseError> {
        let name_tok = self.advance();
        let TokenKind::Identifier(name) = name_tok.kind else {
            return Err(self.unexpected(Expected::Identifier, &name_tok));
        };
        trace!(name, line = let_tok.line, "declaration");

        let ctx = Context::InDeclaration {
            name: name.to_string(),
            span: Span::combine(&let_tok.span, &name_tok.span),
        };

        let tok = self.advance();
        match tok.kind {
            TokenKind::Colon => {
                // `int` is the only type. It is required once a `:` is written
                // and carries no further meaning.
                let ty = self.advance();
                if ty.kind != TokenKind::TypeInt {
                    return Err(self.unexpected(Expected::TypeName, &ty).with_context(ctx));
                }
                let eq = self.advance();
                if eq.kind != TokenKind::Equal {
                    return Err(self.unexpected(Expected::Assignment, &eq).with_context(ctx));
                }
            }
            TokenKind::Equal => {}
            _ => return Err(self.unexpected(Expected::TypeAnnotation, &tok).with_context(ctx)),
        }

        let (value, _) = self.binary_expr().map_err(|e| e.with_context(ctx))?;
        let end = self.previous_end();

        Ok(VarDecl {
            name,
            value,
            span: Span::new(let_tok.span.0.start, end),
        })
    }

    /// `expr := INT_LITERAL (op expr | ';')`
    ///
    /// Right-leaning with no precedence: `1 - 2 - 3` is `1 - (2 - 3)`.
    fn binary_expr(&mut self) -> Result<(&'a Expr<'a>, Span), ParseError> {
        let operand = self.advance();
        let TokenKind::IntLiteral(value) = operand.kind else {
            return Err(self.unexpected(Expected::Value, &operand));
        };
        let left = self.alloc(Expr::IntLiteral(value), operand.span.clone());

        let op_tok = self.advance();
        let op = match op_tok.kind {
            TokenKind::Add => BinaryOp::Add,
            TokenKind::Sub => BinaryOp::Sub,
            TokenKind::Mul => BinaryOp::Mul,
            TokenKind::Div => BinaryOp::Div,
            TokenKind::Semicolon => {
                let node = self.alloc(Expr::Binary { left, right: None }, operand.span.clone());
                return Ok((node, operand.span));
            }
            _ => return Err(self.unexpected(Expected::Terminator, &op_tok)),
        };

        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded {
                    depth: self.depth + 1,
                    max_depth: self.max_depth,
                },
                self.source.to_string(),
                op_tok.line,
                op_tok.span,
            ));
        }

        self.depth += 1;
        let right = self.binary_expr();
        self.depth -= 1;

        let (right, right_span) = right.map_err(|e| {
            let missing_operand = matches!(
                e.kind,
                ParseErrorKind::UnexpectedToken {
                    expected: Expected::Value,
                    ..
                }
            );
            if missing_operand && e.context.is_empty() {
                e.with_context(Context::InExpression {
                    kind: format!("right operand of `{}`", op),
                    span: op_tok.span.clone(),
                })
            } else {
                e
            }
        })?;

        let span = Span::combine(&operand.span, &right_span);
        let node = self.alloc(
            Expr::Binary {
                left,
                right: Some((op, right)),
            },
            span.clone(),
        );
        Ok((node, span))
    }

    fn alloc(&self, expr: Expr<'a>, span: Span) -> &'a Expr<'a> {
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span);
        expr
    }

    /// Consume and return the next token. Past the end this keeps yielding `Eof`.
    fn advance(&mut self) -> Token<'a> {
        match self.tokens.get(self.pos) {
            Some(tok) => {
                self.pos += 1;
                tok.clone()
            }
            None => {
                let line = self.tokens.last().map_or(1, |t| t.line);
                let end = self.source.len();
                Token::new(TokenKind::Eof, line, Span::new(end, end))
            }
        }
    }

    /// End offset of the most recently consumed token.
    fn previous_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(self.source.len(), |t| t.span.0.end)
    }

    fn unexpected(&self, expected: Expected, found: &Token<'a>) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind.to_string(),
            },
            self.source.to_string(),
            found.line,
            found.span.clone(),
        )
    }
}
