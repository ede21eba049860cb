/// AST (Abstract Syntax Tree) module
/// Contains the parse tree produced by the parser
///
/// Submodules:
/// - ast: The `Node` sum type and binary operator definitions
pub mod ast;
