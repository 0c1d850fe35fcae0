/// Bindings, function values and execution outcomes.
///
/// A name in a scope is bound to a [`binding::Binding`]: a plain value, a
/// function or a placeholder standing in for a parameter while a function
/// body is validated. Executing a node yields a [`binding::Outcome`].
pub mod binding;

/// Plain values.
///
/// Defines [`core::Value`], its payload and the literal kind it originates
/// from, along with display and numeric conversion.
pub mod core;
