#![allow(clippy::module_inception)]

use crate::ast::statements::Program;
use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

/// Half-open byte range covering one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses source text into a Program, dropping the parser state.
///
/// Callers that want the scope table or the paren-depth counter after
/// the parse should use `parser::parser::parse` instead.
pub fn parse(source: &str) -> Result<Program, Error> {
    let (_, program) = parser::parser::parse(source);
    program
}

/// Resolves a byte offset to its 1-based line number, the text of that
/// line, and the offset within the line. Positions at or past the end
/// of the source resolve onto the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    // Errors at end of input sit one past the last byte; clamp back
    // onto the final line.
    let pos = (position as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    (1, String::new(), 0)
}

/// Displays a formatted error message with source context.
///
/// Output looks like this:
/*
Error: UnexpectedToken (Unexpected token: `2`, did you miss a semicolon?)
-> demo.lilt
   |
20 | let a := 2 2;
   | -----------^
*/
pub fn display_error(source: &str, file_name: &str, error: &Error) {
    let (line, line_text, line_pos) = get_line_at_position(source, error.position().0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.tip() {
        println!("Error: {}", error.name());
    } else {
        println!("Error: {} ({})", error.name(), error.tip());
    }
    println!("-> {}", file_name);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (line_pos + 1).saturating_sub(removed_whitespace);
    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches(' ');
    let removed = string.len() - trimmed.len();
    (String::from(trimmed), removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nSecond line\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 35);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_position_clamps_past_end() {
        let source = "let x := 1 +";

        let (line_number, line, line_pos) = get_line_at_position(source, 1000);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x := 1 +");
        assert_eq!(line_pos, source.len() - 1);
    }

    #[test]
    fn test_get_line_at_position_empty_source() {
        let (line_number, line, line_pos) = get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (trimmed, removed) = remove_starting_whitespace("    let x := 1;");
        assert_eq!(trimmed, "let x := 1;");
        assert_eq!(removed, 4);

        let (trimmed, removed) = remove_starting_whitespace("let x := 1;");
        assert_eq!(trimmed, "let x := 1;");
        assert_eq!(removed, 0);
    }
}
