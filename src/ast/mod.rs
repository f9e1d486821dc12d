/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core node traits and wrappers
/// - expressions: Expression nodes
/// - statements: The program root and statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
