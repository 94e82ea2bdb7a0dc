//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing functions.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::statements::{LetStatement, Program},
    errors::errors::{Error, ParseErrorKind},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    scope::Scope,
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The parser owns its lexer and pulls tokens on demand through a
/// two-token window (`current` plus one token of lookahead). It also
/// owns the scope table for the parse session and the counter that
/// keeps parentheses balanced.
pub struct Parser {
    /// Token source, consumed lazily
    lexer: Lexer,
    /// The token under consideration
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Name-to-binding table filled in by `let` statements
    scope: Scope,
    /// Net count of `(` minus `)` consumed so far
    paren_depth: i32,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance over a lexer.
    ///
    /// Pulls the first two tokens so that both `current` and the
    /// lookahead are populated, then registers all token handlers.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The token source; the parser takes ownership
    ///
    /// # Returns
    ///
    /// A new Parser instance ready to parse.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            scope: Scope::new(),
            paren_depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Consumes the current token and returns it, shifting the window
    /// by one and pulling a fresh token from the lexer. Past the end of
    /// input the window saturates with `EOF` tokens.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(match error {
                Some(error) => error,
                None if self.current.kind == TokenKind::EOF => {
                    Error::new(ParseErrorKind::UnexpectedEndOfInput, self.get_position())
                }
                None => Error::new(
                    ParseErrorKind::UnexpectedToken {
                        token: self.current.literal.clone(),
                    },
                    self.get_position(),
                ),
            });
        }

        Ok(self.advance())
    }

    /// Expects a token of the specified kind with default error message.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns a default Error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Leaves an already-registered binding power untouched so kinds
    /// that are both prefix and infix (`+`, `-`) keep their infix
    /// precedence.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix position
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the scope table built up by this parse session.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Records a `let` binding under its name. A name bound twice keeps
    /// the later statement; the displaced one is returned.
    pub fn define(&mut self, name: String, stmt: LetStatement) -> Option<LetStatement> {
        self.scope.define(name, stmt)
    }

    /// Net parenthesis depth. Zero after every successful parse.
    pub fn paren_depth(&self) -> i32 {
        self.paren_depth
    }

    /// Counts an opening parenthesis.
    pub fn enter_paren(&mut self) {
        self.paren_depth += 1;
    }

    /// Counts a matched closing parenthesis.
    pub fn exit_paren(&mut self) {
        self.paren_depth -= 1;
    }

    /// Returns the byte position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    /// Parses statements until end of input, collecting them into a
    /// Program in source order. The first error aborts the parse; no
    /// partial program is returned.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut program = Program::new();

        while self.current_token_kind() != TokenKind::EOF {
            let stmt = parse_stmt(self)?;
            program.statements.push(stmt);
        }

        if self.paren_depth != 0 {
            return Err(Error::new(
                ParseErrorKind::UnbalancedParens {
                    token: self.current.literal.clone(),
                },
                self.get_position(),
            ));
        }

        Ok(program)
    }
}

/// Parses source text into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates the lexer and
/// parser, initializes all lookup tables, and parses all statements
/// until EOF.
///
/// # Arguments
///
/// * `source` - The source text to parse
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its scope table and depth counter intact)
/// - Result containing either the root Program or the first Error
pub fn parse(source: &str) -> (Parser, Result<Program, Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (parser, program)
}
