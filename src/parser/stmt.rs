use log::warn;

use crate::{
    ast::statements::{ExpressionStatement, Identifier, LetStatement, Statement},
    errors::errors::{Error, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return handler(parser);
    }

    // Only `(` and a number may open a bare expression statement.
    match token_kind {
        TokenKind::OpenParen | TokenKind::Number => parse_expression_stmt(parser),
        TokenKind::Illegal => Err(Error::from_illegal(parser.current_token())),
        _ => Err(Error::new(
            ParseErrorKind::UnsupportedConstruct {
                token: parser.current_token().literal.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let let_token = parser.advance();

    let error = Error::new(
        ParseErrorKind::LetMissingIdentifier {
            token: parser.current_token().literal.clone(),
        },
        parser.get_position(),
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    let error = Error::new(
        ParseErrorKind::LetMissingAssign {
            name: name_token.literal.clone(),
            token: parser.current_token().literal.clone(),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let expr = parse_expr(parser, BindingPower::Default)?;
    expect_statement_terminator(parser)?;

    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };
    let stmt = LetStatement {
        token: let_token,
        name,
        expr,
    };
    parser.define(stmt.name.value.clone(), stmt.clone());

    Ok(Statement::Let(stmt))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start_token = parser.current_token().clone();

    let expr = parse_expr(parser, BindingPower::Default)?;
    expect_statement_terminator(parser)?;

    Ok(Statement::Expression(ExpressionStatement {
        token: start_token,
        expr,
    }))
}

/// Handler for keywords the language reserves but cannot parse yet
/// (`const`, `return`). The keyword is recognised and logged, then the
/// parse fails so the gap stays visible to callers.
pub fn parse_unsupported_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let keyword_token = parser.advance();
    warn!(
        "recognised `{}` statement, which cannot be parsed yet",
        keyword_token.literal
    );

    Err(Error::new(
        ParseErrorKind::UnsupportedStatement {
            keyword: keyword_token.literal.clone(),
        },
        keyword_token.span.start,
    ))
}

fn expect_statement_terminator(parser: &mut Parser) -> Result<Token, Error> {
    match parser.current_token_kind() {
        // A close paren here means the depth went negative somewhere.
        TokenKind::CloseParen => Err(Error::new(
            ParseErrorKind::UnbalancedParens {
                token: parser.current_token().literal.clone(),
            },
            parser.get_position(),
        )),
        TokenKind::Illegal => Err(Error::from_illegal(parser.current_token())),
        _ => parser.expect(TokenKind::Semicolon),
    }
}
