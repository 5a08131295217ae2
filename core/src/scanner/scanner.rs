use tracing::{debug, trace};

use crate::Vec;
use crate::parser::Span;
use crate::scanner::{LexError, Token, TokenKind};
use alloc::string::ToString;

/// Scan the whole source into a token vector terminated by a single `Eof`.
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        trace!(line = token.line, kind = ?token.kind, "token");
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}

/// Single left-to-right pass with one byte of lookahead.
///
/// Every byte the grammar accepts is ASCII, so the cursor only ever advances
/// over ASCII and always sits on a char boundary.
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    /// Current 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
        }
        Some(b)
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0C | 0x08) = self.peek() {
            self.bump();
        }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Produce the next token. Returns `Eof` forever once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        self.skip_whitespace();

        let start = self.pos;
        let line = self.line;
        let Some(c) = self.bump() else {
            return Ok(Token::new(TokenKind::Eof, line, Span::new(start, start)));
        };

        let kind = match c {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                self.take_while(|b| b.is_ascii_alphanumeric() || b == b'_');
                TokenKind::keyword_or_identifier(&self.source[start..self.pos])
            }
            b'0'..=b'9' => {
                self.take_while(|b| b.is_ascii_digit());
                let text = &self.source[start..self.pos];
                // Only digits reach here, so the only failure is overflow.
                match text.parse::<i64>() {
                    Ok(value) => TokenKind::IntLiteral(value),
                    Err(_) => {
                        return Err(LexError::LiteralOutOfRange {
                            line,
                            text: text.to_string(),
                            span: Span::new(start, self.pos),
                        });
                    }
                }
            }
            b'=' => {
                if self.eat(b'>') {
                    TokenKind::Arrow
                } else if self.eat(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            b'+' => self.pick(b'=', TokenKind::AddAssign, TokenKind::Add),
            b'-' => self.pick(b'=', TokenKind::SubAssign, TokenKind::Sub),
            b'*' => self.pick(b'=', TokenKind::MulAssign, TokenKind::Mul),
            b'/' => self.pick(b'=', TokenKind::DivAssign, TokenKind::Div),
            b'&' => self.pick(b'&', TokenKind::And, TokenKind::BitAnd),
            b'|' => self.pick(b'|', TokenKind::Or, TokenKind::BitOr),
            b'!' => self.pick(b'=', TokenKind::NotEqual, TokenKind::Not),
            b'<' => {
                if self.eat(b'=') {
                    TokenKind::LessEqual
                } else if self.eat(b'<') {
                    TokenKind::ShiftLeft
                } else {
                    TokenKind::Less
                }
            }
            b'>' => {
                if self.eat(b'=') {
                    TokenKind::GreaterEqual
                } else if self.eat(b'>') {
                    TokenKind::ShiftRight
                } else {
                    TokenKind::Greater
                }
            }
            b'%' => TokenKind::Mod,
            b'^' => TokenKind::BitXor,
            b'~' => TokenKind::BitNot,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'(' => TokenKind::ParenOpen,
            b')' => TokenKind::ParenClose,
            b'{' => TokenKind::BraceOpen,
            b'}' => TokenKind::BraceClose,
            _ => {
                // Report the whole character, not just its first byte.
                let character = self.source[start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::UnrecognizedCharacter {
                    line,
                    character,
                    span: Span::new(start, start + character.len_utf8()),
                });
            }
        };

        Ok(Token::new(kind, line, Span::new(start, self.pos)))
    }

    /// Two-character operator if the next byte is `second`, else the one-character form.
    fn pick(&mut self, second: u8, long: TokenKind<'src>, short: TokenKind<'src>) -> TokenKind<'src> {
        if self.eat(second) { long } else { short }
    }
}
