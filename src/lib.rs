//! # opcalc
//!
//! opcalc evaluates arithmetic expressions written in infix notation. Input
//! flows through a fixed pipeline: text is tokenized, the arity of `-` is
//! resolved from context, the shunting-yard algorithm produces a postfix plan
//! and a stack machine evaluates it. Every failure is a typed [`CalcError`]
//! that, where possible, points at the offending character.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::evaluate,
    lexer::tokenize,
    normalizer::normalize,
    parser::{PostfixItem, to_postfix},
};

/// Provides the error taxonomy and its presentation.
///
/// This module defines every error the pipeline can report and the single
/// routine that renders an error beneath the expression it came from.
///
/// # Responsibilities
/// - Defines `CalcError`, one variant per kind of failure.
/// - Attaches the offset of the offending character where it is known.
/// - Renders the two-line `^` marker at the presentation boundary.
pub mod error;
/// Holds every stage of the expression pipeline.
///
/// # Responsibilities
/// - Declares the operator registry shared by all stages.
/// - Tokenizes, normalizes, converts to postfix and evaluates.
pub mod interpreter;
/// Numeric limits and checked conversions used by the evaluation rules.
pub mod util;

pub use error::{CalcError, CalcResult, Report, mark_error};

/// Compiles an expression into its postfix evaluation plan.
///
/// # Errors
/// Returns an error if the expression is empty or cannot be tokenized,
/// normalized or converted to postfix.
///
/// # Examples
/// ```
/// use opcalc::{compile, interpreter::parser::render};
///
/// let plan = compile("(3! + 2) ^ 2").unwrap();
/// assert_eq!(render(&plan), "3 ! 2 + 2 ^");
/// ```
pub fn compile(expression: &str) -> CalcResult<Vec<PostfixItem>> {
    if expression.trim().is_empty() {
        return Err(CalcError::InvalidExpression { message: "expression cannot be empty or whitespace only".to_string(),
                                                  offset:  None, });
    }

    let tokens = tokenize(expression)?;
    let tokens = normalize(tokens)?;
    to_postfix(tokens)
}

/// Evaluates an arithmetic expression.
///
/// The call is pure: the same input always yields the same result, and no
/// state is kept between calls.
///
/// # Errors
/// Returns a [`CalcError`] describing the first problem found. Use
/// [`CalcError::report`] to render it with a position marker.
///
/// # Examples
/// ```
/// use opcalc::{CalcError, calculate};
///
/// assert_eq!(calculate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calculate("2^3^2").unwrap(), 512.0);
/// assert_eq!(calculate("3! + 2").unwrap(), 8.0);
///
/// assert_eq!(calculate("5/0").unwrap_err(), CalcError::DivisionByZero { offset: 1 });
/// assert!(calculate("   ").is_err());
/// ```
pub fn calculate(expression: &str) -> CalcResult<f64> {
    let plan = compile(expression)?;
    let value = evaluate(&plan)?;
    log::debug!("{expression:?} = {value}");
    Ok(value)
}
