//! Unit tests for the scanner.

use super::*;
use crate::parser::Span;
use crate::{ToString, Vec};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    scan(source)
        .unwrap_or_else(|e| panic!("scan failed for {:?}: {}", source, e))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_typed_declaration() {
    use TokenKind::*;
    assert_eq!(
        kinds("let x: int = 5;"),
        [Let, Identifier("x"), Colon, TypeInt, Equal, IntLiteral(5), Semicolon, Eof]
    );
}

#[test]
fn test_untyped_declaration_with_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("let y = 2+3*4;"),
        [
            Let,
            Identifier("y"),
            Equal,
            IntLiteral(2),
            Add,
            IntLiteral(3),
            Mul,
            IntLiteral(4),
            Semicolon,
            Eof
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(kinds(""), [TokenKind::Eof]);
    assert_eq!(kinds("  \t\r\n "), [TokenKind::Eof]);
}

#[test]
fn test_exactly_one_eof() {
    let tokens = scan("let a = 1;\n\n").unwrap();
    let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

// ============================================================================
// Identifiers and keywords
// ============================================================================

#[test]
fn test_identifiers() {
    use TokenKind::*;
    assert_eq!(
        kinds("_a b_1 letter integer x9_"),
        [
            Identifier("_a"),
            Identifier("b_1"),
            Identifier("letter"),
            Identifier("integer"),
            Identifier("x9_"),
            Eof
        ]
    );
}

#[test]
fn test_keywords_need_word_boundary() {
    use TokenKind::*;
    assert_eq!(kinds("let int"), [Let, TypeInt, Eof]);
    assert_eq!(kinds("letint"), [Identifier("letint"), Eof]);
}

#[test]
fn test_digits_then_letters_split() {
    use TokenKind::*;
    assert_eq!(kinds("12ab"), [IntLiteral(12), Identifier("ab"), Eof]);
}

// ============================================================================
// Integer literals
// ============================================================================

#[test]
fn test_literal_max_i64() {
    assert_eq!(
        kinds("9223372036854775807"),
        [TokenKind::IntLiteral(i64::MAX), TokenKind::Eof]
    );
}

#[test]
fn test_literal_one_past_max_i64() {
    let err = scan("let big = 9223372036854775808;").unwrap_err();
    assert_eq!(
        err,
        LexError::LiteralOutOfRange {
            line: 1,
            text: "9223372036854775808".to_string(),
            span: Span::new(10, 29),
        }
    );
}

#[test]
fn test_literal_leading_zeros() {
    assert_eq!(kinds("007"), [TokenKind::IntLiteral(7), TokenKind::Eof]);
}

#[test]
fn test_literal_overflow_reports_line() {
    let err = scan("let a = 1;\nlet b = 99999999999999999999;").unwrap_err();
    assert_eq!(err.line(), 2);
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_two_char_operators_are_maximal_munch() {
    use TokenKind::*;
    assert_eq!(
        kinds("== != <= >= && || << >> => += -= *= /="),
        [
            EqualEqual,
            NotEqual,
            LessEqual,
            GreaterEqual,
            And,
            Or,
            ShiftLeft,
            ShiftRight,
            Arrow,
            AddAssign,
            SubAssign,
            MulAssign,
            DivAssign,
            Eof
        ]
    );
}

#[test]
fn test_single_char_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("= < > ! & | ^ ~ % + - * /"),
        [Equal, Less, Greater, Not, BitAnd, BitOr, BitXor, BitNot, Mod, Add, Sub, Mul, Div, Eof]
    );
}

#[test]
fn test_adjacent_operators() {
    use TokenKind::*;
    // `<<=` is `<<` then `=`, `===` is `==` then `=`.
    assert_eq!(kinds("<<="), [ShiftLeft, Equal, Eof]);
    assert_eq!(kinds("==="), [EqualEqual, Equal, Eof]);
    assert_eq!(kinds("a==b"), [Identifier("a"), EqualEqual, Identifier("b"), Eof]);
    assert_eq!(kinds("1--2"), [IntLiteral(1), Sub, Sub, IntLiteral(2), Eof]);
}

#[test]
fn test_punctuation() {
    use TokenKind::*;
    assert_eq!(
        kinds("( ) { } : ; ,"),
        [ParenOpen, ParenClose, BraceOpen, BraceClose, Colon, Semicolon, Comma, Eof]
    );
}

#[test]
fn test_operator_at_end_of_input() {
    use TokenKind::*;
    assert_eq!(kinds("<"), [Less, Eof]);
    assert_eq!(kinds("!"), [Not, Eof]);
    assert_eq!(kinds("="), [Equal, Eof]);
}

#[test]
fn test_bare_operators_are_not_validated() {
    use TokenKind::*;
    assert_eq!(kinds("~;"), [BitNot, Semicolon, Eof]);
}

// ============================================================================
// Lines and spans
// ============================================================================

#[test]
fn test_line_numbers() {
    let tokens = scan("let a = 1;\n\nlet b\n= 2;").unwrap();
    let lines: Vec<_> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        lines,
        [
            (TokenKind::Let, 1),
            (TokenKind::Identifier("a"), 1),
            (TokenKind::Equal, 1),
            (TokenKind::IntLiteral(1), 1),
            (TokenKind::Semicolon, 1),
            (TokenKind::Let, 3),
            (TokenKind::Identifier("b"), 3),
            (TokenKind::Equal, 4),
            (TokenKind::IntLiteral(2), 4),
            (TokenKind::Semicolon, 4),
            (TokenKind::Eof, 4),
        ]
    );
}

#[test]
fn test_lookahead_does_not_miscount_lines() {
    // A one-char operator directly before a newline must stay on its own line.
    let tokens = scan("1 +\n2").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Add);
    assert_eq!(tokens[1].line, 1);
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn test_spans_and_lexemes() {
    let source = "let total = 42;";
    let tokens = scan(source).unwrap();
    assert_eq!(tokens[1].span, Span::new(4, 9));
    assert_eq!(tokens[1].lexeme(source), "total");
    assert_eq!(tokens[3].lexeme(source), "42");
    assert_eq!(tokens[4].lexeme(source), ";");
    assert_eq!(tokens[5].span, Span::new(source.len(), source.len()));
}

#[test]
fn test_exotic_whitespace() {
    use TokenKind::*;
    assert_eq!(kinds("1\x0C2\x083"), [IntLiteral(1), IntLiteral(2), IntLiteral(3), Eof]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unrecognized_character() {
    let err = scan("let x = 5;\nlet y = @;").unwrap_err();
    assert_eq!(
        err,
        LexError::UnrecognizedCharacter {
            line: 2,
            character: '@',
            span: Span::new(19, 20),
        }
    );
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_unrecognized_non_ascii_character() {
    let err = scan("let é = 1;").unwrap_err();
    match err {
        LexError::UnrecognizedCharacter {
            character, span, ..
        } => {
            assert_eq!(character, 'é');
            assert_eq!(span, Span::new(4, 6));
        }
        other => panic!("Expected UnrecognizedCharacter, got {:?}", other),
    }
}

#[test]
fn test_nul_is_not_end_of_input() {
    assert!(matches!(
        scan("let a = 1;\0"),
        Err(LexError::UnrecognizedCharacter { character: '\0', .. })
    ));
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_rescanning_is_idempotent() {
    let source = "let a: int = 1 + 2;\nlet b = 3 / 4 - 5;";
    assert_eq!(scan(source).unwrap(), scan(source).unwrap());
}

#[test]
fn test_scanner_keeps_returning_eof() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier("x"));
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(scanner.line(), 1);
}
