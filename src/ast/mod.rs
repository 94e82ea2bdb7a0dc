/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression tree
/// - statements: Definitions for statements and the program root
pub mod expressions;
pub mod statements;
