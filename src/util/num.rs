/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use graphcalc::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(48, "too big!"), Ok(48.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(value as f64),
        _ => Err(error),
    }
}

/// Safely converts a whole, non-negative `f64` to `usize`.
///
/// ## Errors
/// Returns `Err(error)` if the value is not finite, negative, fractional, or
/// larger than `MAX_SAFE_U64_INT` or `usize::MAX`.
///
/// ## Example
/// ```
/// use graphcalc::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(96.0, "bad"), Ok(96));
/// assert_eq!(f64_to_usize_checked(-1.0, "bad"), Err("bad"));
/// assert_eq!(f64_to_usize_checked(2.5, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss)]
pub fn f64_to_usize_checked<E>(value: f64, error: E) -> Result<usize, E> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(error);
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }

    usize::try_from(value as u64).map_or(Err(error), Ok)
}
