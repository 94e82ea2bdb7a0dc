use crate::{Position, Span};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Byte cursor over the source text with one character of lookahead.
///
/// `next_token` hands out exactly one token per call and never fails:
/// bytes the lexer does not recognise come back as `Illegal` tokens for
/// the parser to surface. Once the input is exhausted every further call
/// returns the same zero-width `EOF` token.
pub struct Lexer {
    source: String,
    // index of the byte held in `ch`
    position: usize,
    // index of the next byte to read
    read_position: usize,
    // byte under examination, 0 once the input is exhausted
    ch: u8,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        match self.ch {
            b':' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.char_token(TokenKind::Assignment, start)
                } else {
                    self.char_token(TokenKind::Colon, start)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.char_token(TokenKind::NotEquals, start)
                } else {
                    self.char_token(TokenKind::Not, start)
                }
            }
            b'<' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.char_token(TokenKind::LessEquals, start)
                } else {
                    self.char_token(TokenKind::Less, start)
                }
            }
            b'>' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.char_token(TokenKind::GreaterEquals, start)
                } else {
                    self.char_token(TokenKind::Greater, start)
                }
            }
            b'=' => self.char_token(TokenKind::Equals, start),
            b'+' => self.char_token(TokenKind::Plus, start),
            b'-' => self.char_token(TokenKind::Dash, start),
            b'/' => self.char_token(TokenKind::Slash, start),
            b'*' => self.char_token(TokenKind::Star, start),
            b'^' => self.char_token(TokenKind::Caret, start),
            b'&' => self.char_token(TokenKind::Ampersand, start),
            b';' => self.char_token(TokenKind::Semicolon, start),
            b',' => self.char_token(TokenKind::Comma, start),
            b'(' => self.char_token(TokenKind::OpenParen, start),
            b')' => self.char_token(TokenKind::CloseParen, start),
            b'{' => self.char_token(TokenKind::OpenCurly, start),
            b'}' => self.char_token(TokenKind::CloseCurly, start),
            b'[' => self.char_token(TokenKind::OpenBracket, start),
            b']' => self.char_token(TokenKind::CloseBracket, start),
            b'"' => self.read_string(start),
            0 => Token::new(TokenKind::EOF, "", self.span_from(start)),
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                let kind = RESERVED_LOOKUP
                    .get(literal.as_str())
                    .copied()
                    .unwrap_or(TokenKind::Identifier);
                Token::new(kind, literal, self.span_from(start))
            }
            ch if is_digit(ch) => {
                let literal = self.read_number();
                Token::new(TokenKind::Number, literal, self.span_from(start))
            }
            ch => {
                // Single byte, not a slice: a stray multi-byte character
                // becomes one Illegal token per byte.
                self.read_char();
                Token::new(
                    TokenKind::Illegal,
                    (ch as char).to_string(),
                    self.span_from(start),
                )
            }
        }
    }

    fn read_char(&mut self) {
        if self.read_position >= self.source.len() {
            self.ch = 0;
        } else {
            self.ch = self.source.as_bytes()[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.source.len() {
            0
        } else {
            self.source.as_bytes()[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_ascii_whitespace() {
            self.read_char();
        }
    }

    // Finishes a one- or two-byte token whose last byte is still under the
    // cursor.
    fn char_token(&mut self, kind: TokenKind, start: usize) -> Token {
        self.read_char();
        Token::new(kind, &self.source[start..self.position], self.span_from(start))
    }

    fn read_string(&mut self, start: usize) -> Token {
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }

        if self.ch == 0 {
            // Ran off the end looking for the closing quote; hand the
            // whole tail back as one Illegal token.
            return Token::new(
                TokenKind::Illegal,
                &self.source[start..self.position],
                self.span_from(start),
            );
        }

        let literal = String::from(&self.source[start + 1..self.position]);
        self.read_char();
        Token::new(TokenKind::String, literal, self.span_from(start))
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from(&self.source[start..self.position])
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        String::from(&self.source[start..self.position])
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start: Position(start as u32),
            end: Position(self.position as u32),
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Runs a fresh lexer over `source` to completion, returning every token
/// including the end-of-input marker.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let kind = token.kind;
        tokens.push(token);

        if kind == TokenKind::EOF {
            break;
        }
    }

    tokens
}
