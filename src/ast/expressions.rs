use crate::lexer::tokens::Token;

/// A single node of an expression tree.
///
/// Leaves carry their token directly. `Unary` pairs a prefix operator
/// with exactly one operand token; `Paren` and `Binary` own their
/// subtrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Token),
    Unary(UnaryExpr),
    Paren(ParenExpr),
    Binary(BinaryExpr),
}

impl Expression {
    /// The binary node behind this expression, if it is one.
    pub fn as_binary(&self) -> Option<&BinaryExpr> {
        match self {
            Expression::Binary(binary) => Some(binary),
            _ => None,
        }
    }
}

/// Prefix operation: `-5`, `!done`, `^flags`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Token,
}

/// Parenthesised sub-expression: `(1 + 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub expr: Box<Expression>,
}

/// Binary operation between two expressions: `a + b`, `a <= b * c`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: Token,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}
