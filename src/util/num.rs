/// Largest magnitude of an integer exactly representable as an `f64`
/// (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// Mixed integer and float arithmetic promotes the integer operand through
/// this function, so a promotion never rounds silently.
///
/// # Errors
/// Returns `Err(error)` if the magnitude of `value` exceeds
/// [`MAX_SAFE_U64_INT`].
///
/// # Example
/// ```
/// use moonlet::util::num::i64_to_f64_checked;
///
/// assert_eq!(i64_to_f64_checked(42, "too big"), Ok(42.0));
///
/// let big = 9_007_199_254_740_992;
/// assert_eq!(i64_to_f64_checked(big, "too big"), Err("too big"));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}
