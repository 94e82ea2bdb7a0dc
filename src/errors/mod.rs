//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while parsing. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for every way a parse can fail
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! The first error aborts the parse; there is no recovery mode.

pub mod errors;

#[cfg(test)]
mod tests;
