use crate::{
    ast::expressions::{BinaryExpr, Expression, ParenExpr, UnaryExpr},
    errors::errors::{Error, ParseErrorKind},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None if token_kind == TokenKind::Illegal => {
            return Err(Error::from_illegal(parser.current_token()));
        }
        None if token_kind == TokenKind::EOF => {
            return Err(Error::new(
                ParseErrorKind::UnexpectedEndOfInput,
                parser.get_position(),
            ));
        }
        None => {
            return Err(Error::new(
                ParseErrorKind::UnexpectedToken {
                    token: parser.current_token().literal.clone(),
                },
                parser.get_position(),
            ));
        }
    };

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than the caller, keep folding
    // it into the left-hand side. Strictly-greater keeps operators of
    // equal precedence left-associative.
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => {
                return Err(Error::new(
                    ParseErrorKind::UnexpectedToken {
                        token: parser.current_token().literal.clone(),
                    },
                    parser.get_position(),
                ));
            }
        };

        let operator_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match parser.current_token_kind() {
        TokenKind::Number | TokenKind::Identifier | TokenKind::String => {
            Ok(Expression::Literal(parser.advance()))
        }
        _ => Err(Error::new(
            ParseErrorKind::UnexpectedToken {
                token: parser.current_token().literal.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Binary(BinaryExpr {
        operator: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

// A prefix operator claims the operator token plus exactly one operand
// token; grouping is not allowed after it.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();

    let operand = match parser.current_token_kind() {
        TokenKind::Number | TokenKind::Identifier | TokenKind::String => parser.advance(),
        TokenKind::Illegal => {
            return Err(Error::from_illegal(parser.current_token()));
        }
        TokenKind::EOF => {
            return Err(Error::new(
                ParseErrorKind::UnexpectedEndOfInput,
                parser.get_position(),
            ));
        }
        _ => {
            return Err(Error::new(
                ParseErrorKind::UnexpectedToken {
                    token: parser.current_token().literal.clone(),
                },
                parser.get_position(),
            ));
        }
    };

    Ok(Expression::Unary(UnaryExpr {
        operator: operator_token,
        operand,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    parser.enter_paren();

    let inner = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::Illegal {
        return Err(Error::from_illegal(parser.current_token()));
    }

    let error = Error::new(
        ParseErrorKind::UnbalancedParens {
            token: parser.current_token().literal.clone(),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::CloseParen, Some(error))?;
    parser.exit_paren();

    Ok(Expression::Paren(ParenExpr {
        expr: Box::new(inner),
    }))
}
