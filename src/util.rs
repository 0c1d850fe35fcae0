/// Numeric conversion helpers.
///
/// Converts between integer and floating point types without silent loss of
/// precision. The conversion fails instead of rounding.
pub mod num;
