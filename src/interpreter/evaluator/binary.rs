use crate::{
    error::{CalcError, CalcResult},
    util::num::check_magnitude,
};

pub fn add(left: f64, right: f64, offset: usize) -> CalcResult<f64> {
    check_magnitude(left + right, || format!("{left} + {right}"), offset)
}

pub fn subtract(left: f64, right: f64, offset: usize) -> CalcResult<f64> {
    check_magnitude(left - right, || format!("{left} - {right}"), offset)
}

pub fn multiply(left: f64, right: f64, offset: usize) -> CalcResult<f64> {
    check_magnitude(left * right, || format!("{left} * {right}"), offset)
}

/// Divides `left` by `right`, refusing an exact zero divisor.
///
/// # Example
/// ```
/// use opcalc::{CalcError, interpreter::evaluator::binary::divide};
///
/// assert_eq!(divide(10.0, 4.0, 2).unwrap(), 2.5);
/// assert_eq!(divide(1.0, 0.0, 1).unwrap_err(), CalcError::DivisionByZero { offset: 1 });
/// ```
pub fn divide(left: f64, right: f64, offset: usize) -> CalcResult<f64> {
    if right == 0.0 {
        return Err(CalcError::DivisionByZero { offset });
    }
    check_magnitude(left / right, || format!("{left} / {right}"), offset)
}

/// Floored modulo: a nonzero remainder takes the sign of the divisor, so
/// `-7 % 3` is `2` and `7 % -3` is `-2`.
pub fn modulo(left: f64, right: f64, offset: usize) -> CalcResult<f64> {
    if right == 0.0 {
        return Err(CalcError::DivisionByZero { offset });
    }
    let remainder = left % right;
    if remainder != 0.0 && (remainder < 0.0) != (right < 0.0) {
        Ok(remainder + right)
    } else {
        Ok(remainder)
    }
}

/// Raises `base` to `exponent`.
///
/// Results beyond `1e308` (including division-like cases such as `0^-1`) are
/// out of range; a negative base with a fractional exponent has no real
/// result.
pub fn power(base: f64, exponent: f64, offset: usize) -> CalcResult<f64> {
    let value = base.powf(exponent);
    if value.is_nan() {
        return Err(CalcError::invalid_at(format!("{base}^{exponent} is not a real number"),
                                         offset));
    }
    check_magnitude(value, || format!("{base}^{exponent}"), offset)
}

pub fn maximum(left: f64, right: f64, _offset: usize) -> CalcResult<f64> {
    Ok(left.max(right))
}

pub fn minimum(left: f64, right: f64, _offset: usize) -> CalcResult<f64> {
    Ok(left.min(right))
}

/// Arithmetic mean, halved before summing so finite operands never overflow.
pub fn mean(left: f64, right: f64, offset: usize) -> CalcResult<f64> {
    check_magnitude(left / 2.0 + right / 2.0, || format!("{left} @ {right}"), offset)
}
