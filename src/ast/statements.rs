use crate::lexer::tokens::Token;

use super::expressions::Expression;

/// A name introduced by a `let` binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

/// Variable binding: `let total := (1 + 2) * 3;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` keyword token
    pub token: Token,
    pub name: Identifier,
    pub expr: Expression,
}

/// A bare expression followed by a semicolon: `(1 + 2) * 3;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    pub expr: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Expression(ExpressionStatement),
}

/// The root of a parsed source file: statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Program {
        Program {
            statements: Vec::new(),
        }
    }
}
