use crate::error::{CalcError, CalcResult};

/// Largest magnitude a result may have before it is reported as out of range.
pub const MAX_RESULT: f64 = 1e308;
/// Largest operand accepted by the factorial operator. `171!` is not finite.
pub const MAX_FACTORIAL_INPUT: u64 = 170;
/// Distance from an integer under which a value is treated as that integer.
pub const INTEGER_TOLERANCE: f64 = 0.0001;
/// Smallest magnitude whose canonical representation turns scientific.
pub const PLAIN_NOTATION_MAX: f64 = 1e16;
/// Nonzero magnitudes below this are written in scientific notation.
pub const PLAIN_NOTATION_MIN: f64 = 1e-4;
/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Passes `value` through if it is finite and within [`MAX_RESULT`].
///
/// `describe` is only called on failure, to build the error details.
///
/// # Example
/// ```
/// use opcalc::{CalcError, util::num::check_magnitude};
///
/// assert_eq!(check_magnitude(4.0, || "2 * 2".to_string(), 1), Ok(4.0));
///
/// let err = check_magnitude(f64::INFINITY, || "1e308 * 10".to_string(), 5).unwrap_err();
/// assert!(matches!(err, CalcError::RangeExceeded { offset: Some(5), .. }));
/// ```
pub fn check_magnitude<F>(value: f64, describe: F, offset: usize) -> CalcResult<f64>
    where F: FnOnce() -> String
{
    if value.is_finite() && value.abs() <= MAX_RESULT {
        Ok(value)
    } else {
        Err(CalcError::range_at(format!("result of {} is too large", describe()), offset))
    }
}

/// Rounds `value` to the nearest integer if it is within
/// [`INTEGER_TOLERANCE`] of it, and returns it unchanged otherwise.
///
/// This absorbs floating-point drift such as `(0.1 + 0.2) * 10`.
///
/// # Example
/// ```
/// use opcalc::util::num::snap_to_integer;
///
/// assert_eq!(snap_to_integer(2.99999), 3.0);
/// assert_eq!(snap_to_integer(2.5), 2.5);
/// ```
#[must_use]
pub fn snap_to_integer(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        rounded
    } else {
        value
    }
}

/// Returns `true` when the canonical decimal form of `value` needs no
/// exponent, i.e. it is zero or its magnitude lies in
/// `[PLAIN_NOTATION_MIN, PLAIN_NOTATION_MAX)`.
#[must_use]
pub fn has_plain_notation(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude == 0.0 || (PLAIN_NOTATION_MIN..PLAIN_NOTATION_MAX).contains(&magnitude)
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// exactly representable and not fractional.
///
/// ## Errors
/// Returns a `RangeExceeded` error anchored at `offset` otherwise.
///
/// # Example
/// ```
/// use opcalc::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0, 0).unwrap(), 7);
/// assert!(f64_to_u64_checked(-5.0, 0).is_err());
/// assert!(f64_to_u64_checked(1.5, 0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64, offset: usize) -> CalcResult<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(CalcError::range_at(format!("{value} cannot be used as a whole number"),
                                       offset));
    }
    if value.fract() != 0.0 {
        return Err(CalcError::range_at(format!("{value} is not a whole number"), offset));
    }
    Ok(value as u64)
}

/// Converts a `u64` that is known to be at most [`MAX_SAFE_U64_INT`] into an
/// `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}
