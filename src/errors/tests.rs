//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorTip, ParseErrorKind};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ParseErrorKind::IllegalCharacter {
            literal: "@".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.name(), "IllegalCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ParseErrorKind::UnexpectedToken {
            token: "identifier".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.position().0, 42);
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ParseErrorKind::UnterminatedString {
                literal: "\"abc".to_string(),
            },
            "UnterminatedString",
        ),
        (
            ParseErrorKind::LetMissingIdentifier {
                token: ":=".to_string(),
            },
            "LetMissingIdentifier",
        ),
        (
            ParseErrorKind::LetMissingAssign {
                name: "x".to_string(),
                token: "=".to_string(),
            },
            "LetMissingAssign",
        ),
        (
            ParseErrorKind::UnbalancedParens {
                token: ";".to_string(),
            },
            "UnbalancedParens",
        ),
        (
            ParseErrorKind::UnsupportedStatement {
                keyword: "const".to_string(),
            },
            "UnsupportedStatement",
        ),
        (
            ParseErrorKind::UnsupportedConstruct {
                token: "}".to_string(),
            },
            "UnsupportedConstruct",
        ),
        (ParseErrorKind::UnexpectedEndOfInput, "UnexpectedEndOfInput"),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, Position(0)).name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ParseErrorKind::IllegalCharacter {
            literal: "@".to_string(),
        },
        Position(0),
    );

    assert!(matches!(error.tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ParseErrorKind::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(0),
    );

    match error.tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("semicolon")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_names_the_binding() {
    let error = Error::new(
        ParseErrorKind::LetMissingAssign {
            name: "total".to_string(),
            token: "=".to_string(),
        },
        Position(0),
    );

    match error.tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("let total :=")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_uses_kind_message() {
    let error = Error::new(
        ParseErrorKind::UnsupportedStatement {
            keyword: "return".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.to_string(), "return statements are not supported");
}

#[test]
fn test_from_illegal_stray_byte() {
    let token = Token::new(
        TokenKind::Illegal,
        "@",
        Span {
            start: Position(4),
            end: Position(5),
        },
    );
    let error = Error::from_illegal(&token);

    assert!(matches!(
        error.kind(),
        ParseErrorKind::IllegalCharacter { literal } if literal == "@"
    ));
    assert_eq!(error.position().0, 4);
}

#[test]
fn test_from_illegal_unterminated_string() {
    let token = Token::new(
        TokenKind::Illegal,
        "\"abc",
        Span {
            start: Position(9),
            end: Position(13),
        },
    );
    let error = Error::from_illegal(&token);

    assert!(matches!(
        error.kind(),
        ParseErrorKind::UnterminatedString { literal } if literal == "\"abc"
    ));
    assert_eq!(error.position().0, 9);
}
