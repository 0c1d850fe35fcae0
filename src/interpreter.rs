/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, binds values and
/// functions in scopes, performs arithmetic and comparisons, calls functions
/// and prints values.
///
/// # Responsibilities
/// - Executes every node kind against a scope.
/// - Validates function bodies at declaration time using placeholders.
/// - Reports runtime errors such as division by zero, unknown names or
///   mismatched operand kinds.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// tokens, each carrying its literal value and its source position. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and position.
/// - Handles numeric, string and boolean literals, identifiers, sigils and
///   comments.
/// - Reports lexical errors for unterminated quotes and unknown parts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs one node per statement.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Validates the grammar, reporting the first error with its position.
pub mod parser;
/// Source positions.
///
/// Every token, node and error carries a [`position::Position`].
pub mod position;
/// Lexical scopes.
///
/// A [`scope::Scope`] holds the bindings of a program, a function
/// declaration or a single call, and links to its outer scope.
pub mod scope;
/// Token kinds and their recognition patterns.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced by literals, operators and
/// calls, the function values built from declarations and the placeholders
/// used while validating function bodies.
///
/// # Responsibilities
/// - Defines [`value::core::Value`] and the kinds of literals it originates
///   from.
/// - Defines what a name can be bound to and what executing a node yields.
pub mod value;
