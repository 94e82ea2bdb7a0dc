use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ParseErrorKind,
    position: Position,
}

impl Error {
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        Error { kind, position }
    }

    /// Error for an `Illegal` token. A literal starting with a quote is
    /// the bounded tail of an unterminated string; anything else is a
    /// stray byte.
    pub fn from_illegal(token: &Token) -> Self {
        let kind = if token.literal.starts_with('"') {
            ParseErrorKind::UnterminatedString {
                literal: token.literal.clone(),
            }
        } else {
            ParseErrorKind::IllegalCharacter {
                literal: token.literal.clone(),
            }
        };

        Error::new(kind, token.span.start)
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            ParseErrorKind::IllegalCharacter { .. } => "IllegalCharacter",
            ParseErrorKind::UnterminatedString { .. } => "UnterminatedString",
            ParseErrorKind::LetMissingIdentifier { .. } => "LetMissingIdentifier",
            ParseErrorKind::LetMissingAssign { .. } => "LetMissingAssign",
            ParseErrorKind::UnbalancedParens { .. } => "UnbalancedParens",
            ParseErrorKind::UnsupportedStatement { .. } => "UnsupportedStatement",
            ParseErrorKind::UnsupportedConstruct { .. } => "UnsupportedConstruct",
            ParseErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            ParseErrorKind::UnexpectedEndOfInput => "UnexpectedEndOfInput",
        }
    }

    pub fn tip(&self) -> ErrorTip {
        match &self.kind {
            ParseErrorKind::IllegalCharacter { .. } => ErrorTip::None,
            ParseErrorKind::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "Add a closing `\"` before the end of the file",
            )),
            ParseErrorKind::LetMissingIdentifier { .. } => ErrorTip::Suggestion(String::from(
                "`let` must be followed by a name, e.g. `let x := 1;`",
            )),
            ParseErrorKind::LetMissingAssign { name, .. } => {
                ErrorTip::Suggestion(format!("Bindings use `:=`, try `let {} := ...;`", name))
            }
            ParseErrorKind::UnbalancedParens { .. } => {
                ErrorTip::Suggestion(String::from("Every `(` needs a matching `)`"))
            }
            ParseErrorKind::UnsupportedStatement { keyword } => ErrorTip::Suggestion(format!(
                "`{}` is recognised but cannot be parsed yet",
                keyword
            )),
            ParseErrorKind::UnsupportedConstruct { .. } => ErrorTip::Suggestion(String::from(
                "Statements start with `let`, a number or `(`",
            )),
            ParseErrorKind::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ParseErrorKind::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The last statement is missing its ending",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("illegal character: {literal:?}")]
    IllegalCharacter { literal: String },
    #[error("unterminated string literal: {literal:?}")]
    UnterminatedString { literal: String },
    #[error("expected an identifier after `let`, found {token:?}")]
    LetMissingIdentifier { token: String },
    #[error("expected `:=` after `let {name}`, found {token:?}")]
    LetMissingAssign { name: String, token: String },
    #[error("unbalanced parentheses near {token:?}")]
    UnbalancedParens { token: String },
    #[error("{keyword} statements are not supported")]
    UnsupportedStatement { keyword: String },
    #[error("{token:?} cannot start a statement")]
    UnsupportedConstruct { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
