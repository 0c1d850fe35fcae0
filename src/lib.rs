//! # moonlet
//!
//! moonlet is an interpreter for Moonlet, a small scripting language whose
//! statements are introduced by two character sigils such as `=:` (declare),
//! `=|` (function), `=?` (conditional) and `=!` (print).
//! Source text is tokenized, parsed into a tree and executed against a root
//! scope.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{collections::BTreeMap, io::Write};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Program, lexer::tokenize, parser::core::parse, scope::Scope},
};

/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] enum and the node structs shared by
/// several variants. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Keeps the originating token of every node for error reporting.
pub mod ast;
/// Provides the error type shared by all stages.
///
/// Lexing, parsing and evaluation all fail with an [`error::Error`] that
/// carries a kind, a message and the source position of the failure.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and scopes.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values and
///   scopes.
/// - Provides entry points for each stage.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Name of the root scope of a program.
pub const PROGRAM_SCOPE: &str = "<Program>";

/// Runs a Moonlet program, printing to standard output.
///
/// Returns the final bindings of the root scope, rendered as text and ordered
/// by name.
///
/// # Errors
/// Returns the first error raised by the lexer, the parser or the evaluator.
///
/// # Examples
/// ```
/// use moonlet::run;
///
/// let bindings = run("=: x 10").unwrap();
/// assert_eq!(bindings["x"], "10");
///
/// // 'y' is not defined
/// assert!(run("=+ y 1").is_err());
/// ```
pub fn run(source: &str) -> Result<BTreeMap<String, String>, Error> {
    run_with(source, &mut Program::new())
}

/// Runs a Moonlet program with a configured [`Program`].
///
/// Prints go to the program's sink, which makes this the entry point for
/// capturing output.
///
/// # Errors
/// Returns the first error raised by the lexer, the parser or the evaluator.
///
/// # Examples
/// ```
/// use moonlet::{interpreter::evaluator::core::Program, run_with};
///
/// let mut program = Program::with_output(Vec::new());
/// run_with("=! 'hello'", &mut program).unwrap();
/// assert_eq!(program.into_output(), b"hello\n");
/// ```
pub fn run_with<W: Write>(source: &str,
                          program: &mut Program<W>)
                          -> Result<BTreeMap<String, String>, Error> {
    let tokens = tokenize(source)?;
    let tree = parse(&tokens)?;

    let root = Scope::root(PROGRAM_SCOPE);
    let executed = program.exec_list(&tree, &root);

    let bindings = root.borrow().snapshot();
    Scope::release(&root);
    executed.map(|_| bindings)
}
