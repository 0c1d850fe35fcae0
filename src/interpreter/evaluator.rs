/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparison and compound assignment, including the
/// origin checks and the placeholder short circuit.
pub mod binary;

/// Core evaluation logic and the [`core::Program`] runtime.
///
/// Contains the node dispatch, list execution, literals, identifiers,
/// parameters and printing.
pub mod core;

/// Evaluation of conditionals.
pub mod conditional;

/// Function evaluation.
///
/// Handles declaration, validation and invocation of user defined functions.
pub mod function;

/// Variable declarations and returns.
pub mod statement;
