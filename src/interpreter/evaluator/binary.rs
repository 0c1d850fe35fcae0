/// Comparison of two plain values.
pub mod comparison;

/// Dispatch of binary nodes and compound assignments.
pub mod core;

/// Arithmetic on two plain values.
///
/// Integer arithmetic is checked, division always produces a float and
/// strings concatenate with `+`.
pub mod scalar;
