//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization through a byte cursor with one byte of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token span tracking for error reporting
//! - Whitespace handling
//!
//! The lexer never fails: unrecognised input is downgraded to `Illegal`
//! tokens and reported by the parser.

pub mod lexer;
pub mod tokens;
