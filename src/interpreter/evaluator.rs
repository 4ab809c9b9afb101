/// The postfix evaluation loop.
///
/// Walks a postfix plan with a value stack and dispatches each operator to
/// the rule recorded in the registry.
pub mod core;

/// Evaluation rules of the binary operators.
///
/// Arithmetic results are checked against the representable range; division
/// and modulo refuse a zero divisor.
pub mod binary;

/// Evaluation rules of the unary operators: negation, factorial and digit
/// sum.
pub mod unary;
