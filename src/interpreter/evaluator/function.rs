/// Declaration and invocation of user defined functions.
///
/// Covers validation of a body at declaration time, argument checking, the
/// call depth limit and capture of returned values.
pub mod core;
