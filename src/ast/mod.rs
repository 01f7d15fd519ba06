/// AST (Abstract Syntax Tree) module
/// Contains the expression tree built by the parser
///
/// Submodules:
/// - ast: Node roles, nodes and the arena-backed tree with its traversals
pub mod ast;
