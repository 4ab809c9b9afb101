/// Numeric limits and checked conversions.
///
/// This module holds the constants that bound every evaluation rule (the
/// result ceiling, the factorial limit, the integer tolerance) together with
/// helpers that convert between `f64` and integer types without silent data
/// loss.
pub mod num;
