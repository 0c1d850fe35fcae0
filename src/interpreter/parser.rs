/// Arithmetic expressions and atoms.
///
/// Parses literals and identifiers, optionally followed by an arithmetic
/// operator and another atom.
pub mod binary;
/// Code blocks.
///
/// Parses the statements between `={` (or `{`) and the closing `}`.
pub mod block;
/// Conditionals and their conditions.
///
/// Parses `=?` statements, nested comparisons and the optional `:` branch.
pub mod condition;
/// Parser entry point.
///
/// Contains the program loop, the result type and the expression rule.
pub mod core;
/// Function declarations, calls and returns.
pub mod function;
/// Statement dispatch, assignments and print statements.
pub mod statement;
/// Shared helpers for token inspection and list parsing.
pub mod utils;
