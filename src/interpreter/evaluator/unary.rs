use crate::{
    error::{CalcError, CalcResult},
    util::num::{
        MAX_FACTORIAL_INPUT, f64_to_u64_checked, has_plain_notation, snap_to_integer, u64_to_f64,
    },
};

/// Arithmetic negation, shared by `u-` and `~`.
pub fn negate(operand: f64, _offset: usize) -> CalcResult<f64> {
    Ok(-operand)
}

/// Computes `operand!`.
///
/// The operand is first snapped to the nearest integer if it lies within
/// `0.0001` of one, absorbing drift from earlier operations. What remains must
/// be a non-negative integer no larger than 170, the largest input whose
/// factorial is finite.
///
/// # Example
/// ```
/// use opcalc::{CalcError, interpreter::evaluator::unary::factorial};
///
/// assert_eq!(factorial(5.0, 1).unwrap(), 120.0);
/// assert_eq!(factorial(2.99999, 1).unwrap(), 6.0);
/// assert!(matches!(factorial(-3.0, 1).unwrap_err(),
///                  CalcError::FactorialNegativeNumber { .. }));
/// assert!(matches!(factorial(2.5, 1).unwrap_err(),
///                  CalcError::FactorialNonInteger { .. }));
/// ```
pub fn factorial(operand: f64, offset: usize) -> CalcResult<f64> {
    let value = snap_to_integer(operand);

    if value < 0.0 {
        return Err(CalcError::FactorialNegativeNumber { value: operand,
                                                        offset });
    }
    if value.fract() != 0.0 {
        return Err(CalcError::FactorialNonInteger { value: operand,
                                                    offset });
    }
    if value > u64_to_f64(MAX_FACTORIAL_INPUT) {
        return Err(CalcError::range_at(format!("factorial input {value} is larger than {MAX_FACTORIAL_INPUT}"),
                                       offset));
    }

    let n = f64_to_u64_checked(value, offset)?;
    Ok((2..=n).fold(1.0, |product, k| product * u64_to_f64(k)))
}

/// Sums the decimal digits of `operand`, e.g. `123.45#` is `15`.
///
/// Only operands whose canonical decimal form needs no exponent are accepted,
/// so digits are never silently dropped.
pub fn digit_sum(operand: f64, offset: usize) -> CalcResult<f64> {
    if operand < 0.0 {
        return Err(CalcError::invalid_at(format!("digit sum is not defined for negative numbers: {operand}"),
                                         offset));
    }
    if !has_plain_notation(operand) {
        return Err(CalcError::range_at(format!("{operand:e} cannot be written without scientific notation"),
                                       offset));
    }

    let sum: u32 = operand.to_string()
                          .chars()
                          .filter_map(|c| c.to_digit(10))
                          .sum();
    Ok(f64::from(sum))
}
