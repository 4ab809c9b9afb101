use std::fmt;

use crate::{error::CalcError, interpreter::lexer::strip_whitespace};

/// An error paired with the expression it was raised for.
///
/// This is the presentation boundary of the crate: the pipeline itself only
/// produces structured [`CalcError`] values, and `Report` turns one into the
/// text shown to a user.
///
/// The rendered form is the message, the whitespace-stripped expression and,
/// when the error carries an offset, a marker line pointing at the offending
/// character:
/// ```text
/// Error: Division by zero is not allowed.
/// 5/0
///  ^
/// ```
#[derive(Debug)]
pub struct Report<'a> {
    expression: &'a str,
    error:      &'a CalcError,
}

impl CalcError {
    /// Pairs the error with the raw expression text for display.
    ///
    /// # Example
    /// ```
    /// use opcalc::calculate;
    ///
    /// let expression = "4 + 5)";
    /// let error = calculate(expression).unwrap_err();
    /// assert_eq!(error.report(expression).to_string(),
    ///            "Error: Mismatched parentheses.\n4+5)\n   ^");
    /// ```
    #[must_use]
    pub const fn report<'a>(&'a self, expression: &'a str) -> Report<'a> {
        Report { expression,
                 error: self }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = strip_whitespace(self.expression);
        writeln!(f, "Error: {}", self.error)?;
        match self.error.offset() {
            Some(offset) => write!(f, "{}", mark_error(&compact, offset)),
            None => write!(f, "{compact}"),
        }
    }
}

/// Returns `expression` followed by a second line with a `^` under the
/// character at `offset`.
///
/// Offsets past the end are clamped so that the marker sits just after the
/// last character.
///
/// # Example
/// ```
/// use opcalc::mark_error;
///
/// assert_eq!(mark_error("2*^3", 2), "2*^3\n  ^");
/// assert_eq!(mark_error("3+", 9), "3+\n  ^");
/// ```
#[must_use]
pub fn mark_error(expression: &str, offset: usize) -> String {
    let column = offset.min(expression.chars().count());
    format!("{expression}\n{}^", " ".repeat(column))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn report_without_offset_prints_expression_only() {
        let error = CalcError::InvalidExpression { message: "too many values".to_string(),
                                                   offset:  None, };
        assert_eq!(error.report("1 + 1").to_string(),
                   "Error: Invalid expression: too many values.\n1+1");
    }

    #[test]
    fn report_marks_offset_in_stripped_text() {
        let error = CalcError::DivisionByZero { offset: 3 };
        assert_eq!(error.report(" 10 / 0").to_string(),
                   "Error: Division by zero is not allowed.\n10/0\n   ^");
    }

    #[test]
    fn marker_counts_characters_not_bytes() {
        assert_eq!(mark_error("ג3", 1), "ג3\n ^");
    }
}
