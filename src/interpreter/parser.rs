use std::fmt;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        operator::{Fixity, Operator},
        token::{Token, TokenKind},
    },
};

/// One step of an evaluation plan in postfix order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    /// Push a literal.
    Number {
        value:  f64,
        offset: usize,
    },
    /// Apply an operator to the top of the stack.
    Operator {
        operator: Operator,
        offset:   usize,
    },
}

impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Operator { operator, .. } => write!(f, "{operator}"),
        }
    }
}

/// Renders a postfix plan as space-separated items, e.g. `2 3 4 * +`.
#[must_use]
pub fn render(items: &[PostfixItem]) -> String {
    items.iter()
         .map(PostfixItem::to_string)
         .collect::<Vec<_>>()
         .join(" ")
}

/// An entry of the operator stack. Right parentheses never reach it.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator { operator: Operator, offset: usize },
    LeftParen { offset: usize },
}

/// Converts a normalized token stream into postfix order using the
/// shunting-yard algorithm.
///
/// - Numbers go straight to the output.
/// - Binary operators first emit every pending operator they yield to (see
///   [`OperatorDef::yields_to`]), then wait on the stack.
/// - Prefix operators wait on the stack without emitting anything; nothing
///   pending can be complete before their operand arrives.
/// - Postfix operators emit what they yield to and then go straight to the
///   output, binding to the operand just completed.
/// - `(` waits on the stack as a barrier; `)` emits everything down to it.
///
/// [`OperatorDef::yields_to`]: crate::interpreter::operator::OperatorDef::yields_to
///
/// # Errors
/// - `MismatchedParentheses` at an unmatched `)` or, at end of input, at the
///   innermost unclosed `(`.
/// - `InvalidToken` for an operator whose fixity does not fit its position,
///   which only happens if the stream was not normalized.
///
/// # Example
/// ```
/// use opcalc::interpreter::{
///     lexer::tokenize,
///     normalizer::normalize,
///     parser::{render, to_postfix},
/// };
///
/// let tokens = normalize(tokenize("2^3^2").unwrap()).unwrap();
/// assert_eq!(render(&to_postfix(tokens).unwrap()), "2 3 2 ^ ^");
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> CalcResult<Vec<PostfixItem>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut after_operand = false;

    for token in tokens {
        let offset = token.offset;
        match token.kind {
            TokenKind::Number(value) => {
                output.push(PostfixItem::Number { value, offset });
                after_operand = true;
            },
            TokenKind::Operator(operator) => {
                let fixity = operator.fixity();
                if after_operand == (fixity == Fixity::Prefix) {
                    return Err(CalcError::InvalidToken { token: operator.symbol().to_string(),
                                                         offset });
                }
                match fixity {
                    Fixity::Prefix => stack.push(Pending::Operator { operator, offset }),
                    Fixity::Infix => {
                        emit_yielded(&mut stack, &mut output, operator);
                        stack.push(Pending::Operator { operator, offset });
                        after_operand = false;
                    },
                    Fixity::Postfix => {
                        emit_yielded(&mut stack, &mut output, operator);
                        output.push(PostfixItem::Operator { operator, offset });
                    },
                }
            },
            TokenKind::LeftParen => {
                stack.push(Pending::LeftParen { offset });
                after_operand = false;
            },
            TokenKind::RightParen => {
                close_group(&mut stack, &mut output, offset)?;
                after_operand = true;
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator { operator, offset } => {
                output.push(PostfixItem::Operator { operator, offset });
            },
            Pending::LeftParen { offset } => {
                return Err(CalcError::MismatchedParentheses { offset });
            },
        }
    }

    log::debug!("postfix: {}", render(&output));
    Ok(output)
}

/// Pops every pending operator `incoming` yields to, stopping at a `(`.
fn emit_yielded(stack: &mut Vec<Pending>, output: &mut Vec<PostfixItem>, incoming: Operator) {
    let incoming = incoming.definition();
    while let Some(&Pending::Operator { operator, offset }) = stack.last() {
        if !incoming.yields_to(operator.definition()) {
            break;
        }
        log::trace!("'{}' yields to pending '{operator}'", incoming.symbol);
        stack.pop();
        output.push(PostfixItem::Operator { operator, offset });
    }
}

/// Pops operators down to the matching `(` and discards it.
fn close_group(stack: &mut Vec<Pending>,
               output: &mut Vec<PostfixItem>,
               offset: usize)
               -> CalcResult<()> {
    loop {
        match stack.pop() {
            Some(Pending::Operator { operator, offset }) => {
                output.push(PostfixItem::Operator { operator, offset });
            },
            Some(Pending::LeftParen { .. }) => return Ok(()),
            None => return Err(CalcError::MismatchedParentheses { offset }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{lexer::tokenize, normalizer::normalize};

    fn postfix(source: &str) -> CalcResult<String> {
        let tokens = normalize(tokenize(source)?)?;
        to_postfix(tokens).map(|items| render(&items))
    }

    #[test]
    fn precedence_orders_output() {
        assert_eq!(postfix("2+3*4").unwrap(), "2 3 4 * +");
        assert_eq!(postfix("2*3+4").unwrap(), "2 3 * 4 +");
    }

    #[test]
    fn left_associative_chain() {
        assert_eq!(postfix("8-3-2").unwrap(), "8 3 - 2 -");
    }

    #[test]
    fn right_associative_chain() {
        assert_eq!(postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix("(2+3)*4").unwrap(), "2 3 + 4 *");
    }

    #[test]
    fn postfix_binds_to_preceding_operand() {
        assert_eq!(postfix("3!+2").unwrap(), "3 ! 2 +");
        assert_eq!(postfix("2^3!").unwrap(), "2 3 ! ^");
        assert_eq!(postfix("5!!").unwrap(), "5 ! !");
    }

    #[test]
    fn prefix_operators_wait_for_their_operand() {
        assert_eq!(postfix("2^-3").unwrap(), "2 3 u- ^");
        assert_eq!(postfix("~-3").unwrap(), "3 u- ~");
        assert_eq!(postfix("-2+3").unwrap(), "2 u- 3 +");
        assert_eq!(postfix("~--3").unwrap(), "3 u- u- ~");
    }

    #[test]
    fn unclosed_paren_reports_its_offset() {
        assert_eq!(postfix("(3+5").unwrap_err(),
                   CalcError::MismatchedParentheses { offset: 0 });
        assert_eq!(postfix("((3+5)").unwrap_err(),
                   CalcError::MismatchedParentheses { offset: 0 });
    }

    #[test]
    fn unmatched_right_paren_reports_its_offset() {
        assert_eq!(postfix("4+5)").unwrap_err(),
                   CalcError::MismatchedParentheses { offset: 3 });
    }

    #[test]
    fn unnormalized_minus_is_an_invalid_token() {
        let tokens = tokenize("-3").unwrap();
        assert_eq!(to_postfix(tokens).unwrap_err(),
                   CalcError::InvalidToken { token:  "-".to_string(),
                                             offset: 0, });
    }

    #[test]
    fn offsets_travel_with_items() {
        let tokens = normalize(tokenize("1 / 0").unwrap()).unwrap();
        let items = to_postfix(tokens).unwrap();
        assert_eq!(items[2],
                   PostfixItem::Operator { operator: Operator::Div,
                                           offset:   1, });
    }
}
