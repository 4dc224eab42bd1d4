/// Returns the sign of a value as `-1`, `0` or `1`.
///
/// NaN has no sign and maps to `0`.
///
/// # Example
/// ```
/// use graphcalc::interpreter::evaluator::function::builtin::sign;
///
/// assert_eq!(sign(-42.0), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(f64::NAN), 0.0);
/// ```
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// A mathematical constant that doubles as a scale factor.
///
/// With an empty argument (`PI()`, whose group normalizes to `0`) it is the
/// constant.
/// Applied to a nonzero argument (`PI(2)`, `PIx`) it is the constant times the
/// argument.
///
/// # Example
/// ```
/// use std::f64::consts::PI;
///
/// use graphcalc::interpreter::evaluator::function::builtin::constant;
///
/// assert_eq!(constant(PI, 0.0), PI);
/// assert_eq!(constant(PI, 2.0), 2.0 * PI);
/// ```
#[must_use]
pub fn constant(value: f64, factor: f64) -> f64 {
    if factor == 0.0 { value } else { value * factor }
}
