use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        operator::{Fixity, Operator},
        token::{Token, TokenKind},
    },
};

/// Rewrites `-` into [`Operator::Neg`] wherever it is syntactically unary and
/// checks that every operator sits where its fixity allows.
///
/// A `-` is unary when it opens the expression or follows a `(`, a prefix
/// operator or a binary operator. Postfix operators close an operand, so the
/// `-` in `3!-1` stays binary. Runs of unary minuses are kept as separate
/// negations.
///
/// Rules enforced, each reported as `InvalidExpression` at the offending
/// token:
/// - a prefix operator (`u-` or `~`) is followed by a number, `(` or a unary
///   minus; `~` may not follow a number or a closing parenthesis,
/// - binary operators, `)` and postfix operators follow a complete operand,
/// - numbers and `(` do not follow a complete operand,
/// - the expression does not end in a prefix or binary operator.
///
/// The output satisfies the invariant [`to_postfix`] relies on: every
/// operator token already carries its final arity.
///
/// [`to_postfix`]: crate::interpreter::parser::to_postfix
///
/// # Example
/// ```
/// use opcalc::interpreter::{
///     lexer::tokenize,
///     normalizer::normalize,
///     operator::Operator,
/// };
///
/// let tokens = normalize(tokenize("2--3").unwrap()).unwrap();
/// let ops: Vec<_> = tokens.iter().filter_map(|t| t.operator()).collect();
/// assert_eq!(ops, [Operator::Sub, Operator::Neg]);
/// ```
pub fn normalize(tokens: Vec<Token>) -> CalcResult<Vec<Token>> {
    let mut normalized: Vec<Token> = Vec::with_capacity(tokens.len());

    for mut token in tokens {
        let previous = normalized.last();
        let after_operand = previous.is_some_and(Token::ends_operand);

        if let Some(prefix) = previous.filter(|p| p.is_prefix())
           && !matches!(token.kind,
                        TokenKind::Number(_)
                        | TokenKind::LeftParen
                        | TokenKind::Operator(Operator::Sub))
        {
            return Err(CalcError::invalid_at(format!("'{}' cannot follow unary '{}'; expected a number or '('",
                                                     token.spelling(),
                                                     prefix.spelling()),
                                             token.offset));
        }

        match token.kind {
            TokenKind::Number(_) | TokenKind::LeftParen if after_operand => {
                return Err(CalcError::invalid_at(format!("missing operator before '{}'", token.spelling()),
                                                 token.offset));
            },
            TokenKind::Number(_) | TokenKind::LeftParen => {},
            TokenKind::RightParen => {
                if previous.is_none() {
                    return Err(CalcError::MismatchedParentheses { offset: token.offset });
                }
                if !after_operand {
                    return Err(CalcError::invalid_at("missing operand before ')'", token.offset));
                }
            },
            TokenKind::Operator(Operator::Sub) if !after_operand => {
                token.kind = TokenKind::Operator(Operator::Neg);
            },
            TokenKind::Operator(Operator::Tilde) if after_operand => {
                return Err(CalcError::invalid_at(format!("'~' cannot follow '{}'",
                                                         previous.map_or_else(String::new,
                                                                              Token::spelling)),
                                                 token.offset));
            },
            TokenKind::Operator(op) => match op.fixity() {
                Fixity::Infix if !after_operand => {
                    return Err(CalcError::invalid_at(format!("operator '{}' is missing its left operand", op.spelling()),
                                                     token.offset));
                },
                Fixity::Postfix if !after_operand => {
                    return Err(CalcError::invalid_at(format!("'{}' must follow a number, ')' or another postfix operator",
                                                             op.spelling()),
                                                     token.offset));
                },
                _ => {},
            },
        }

        normalized.push(token);
    }

    if let Some(last) = normalized.last()
       && let Some(op) = last.operator()
       && op.fixity() != Fixity::Postfix
    {
        let message = if op.fixity() == Fixity::Prefix {
            format!("unary '{}' must be followed by a number or '('", op.spelling())
        } else {
            format!("operator '{}' is missing its right operand", op.spelling())
        };
        return Err(CalcError::invalid_at(message, last.offset));
    }

    log::debug!("normalized: {}",
                normalized.iter()
                          .map(Token::to_string)
                          .collect::<Vec<_>>()
                          .join(" "));
    Ok(normalized)
}
