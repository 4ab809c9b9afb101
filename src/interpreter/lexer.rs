use logos::Logos;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        operator::{Operator, lookup},
        token::{Token, TokenKind},
    },
    util::num::MAX_RESULT,
};

/// A raw lexical unit recognised in the input text.
///
/// Lexemes carry no values; [`tokenize`] validates them and turns them into
/// [`Token`]s.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A run of digits and dots. Only runs with at most one dot and at least
    /// one digit are valid numbers, such as `42`, `3.5`, `7.` or `.5`.
    #[regex(r"[0-9.]+")]
    Number,
    /// A single operator character.
    #[regex(r"[-+*/%^$&@~!#]")]
    Symbol,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Removes every whitespace character from `expression`.
///
/// Offsets reported by the pipeline index into this stripped text.
///
/// # Example
/// ```
/// use opcalc::interpreter::lexer::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 2 +\t3 "), "2+3");
/// ```
#[must_use]
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Converts the source text into a sequence of tokens.
///
/// Whitespace separates tokens but is otherwise ignored; each token records
/// its offset in the whitespace-stripped text. After scanning, two lexical
/// rules are checked: `~` may not follow `~`, and `()` may not be empty.
///
/// # Errors
/// - `InvalidCharacter` for any character outside the calculator's alphabet.
/// - `InvalidToken` for a malformed number such as `1.2.3` or `.`.
/// - `RangeExceeded` for a literal too large to be represented.
/// - `ConsecutiveTildes` at the second of two adjacent `~`.
/// - `InvalidExpression` at `(` for an empty pair of parentheses.
///
/// # Example
/// ```
/// use opcalc::interpreter::{
///     lexer::tokenize,
///     operator::Operator,
///     token::TokenKind,
/// };
///
/// let tokens = tokenize("12 * (3)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number(12.0),
///             TokenKind::Operator(Operator::Mul),
///             TokenKind::LeftParen,
///             TokenKind::Number(3.0),
///             TokenKind::RightParen]);
/// assert_eq!(tokens[2].offset, 3);
/// ```
pub fn tokenize(source: &str) -> CalcResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);
    let mut cursor = 0;
    let mut offset = 0;

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        offset += source[cursor..span.start].chars()
                                            .filter(|c| !c.is_whitespace())
                                            .count();
        cursor = span.start;
        let slice = lexer.slice();

        let kind = match lexeme {
            Ok(Lexeme::Number) => TokenKind::Number(parse_number(slice, offset)?),
            Ok(Lexeme::Symbol) => {
                let def = lookup(slice).ok_or_else(|| CalcError::InvalidToken { token: slice.to_string(),
                                                                                 offset })?;
                TokenKind::Operator(def.operator)
            },
            Ok(Lexeme::LParen) => TokenKind::LeftParen,
            Ok(Lexeme::RParen) => TokenKind::RightParen,
            Ok(Lexeme::Ignored) => continue,
            Err(()) => {
                let character = source[span.start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(CalcError::InvalidCharacter { character, offset });
            },
        };
        tokens.push(Token::new(kind, offset));
    }

    check_lexical_rules(&tokens)?;
    log::debug!("tokenized {} tokens from {source:?}", tokens.len());
    Ok(tokens)
}

/// Parses a digit/dot run into a number no larger than [`MAX_RESULT`].
fn parse_number(slice: &str, offset: usize) -> CalcResult<f64> {
    let dots = slice.chars().filter(|&c| c == '.').count();
    if dots > 1 || dots == slice.len() {
        return Err(CalcError::InvalidToken { token: slice.to_string(),
                                             offset });
    }

    let value = slice.parse::<f64>()
                     .map_err(|_| CalcError::InvalidToken { token: slice.to_string(),
                                                            offset })?;
    if !value.is_finite() || value > MAX_RESULT {
        return Err(CalcError::range_at(format!("number literal {slice} is too large"), offset));
    }
    Ok(value)
}

fn check_lexical_rules(tokens: &[Token]) -> CalcResult<()> {
    for pair in tokens.windows(2) {
        match (pair[0].kind, pair[1].kind) {
            (TokenKind::Operator(Operator::Tilde), TokenKind::Operator(Operator::Tilde)) => {
                return Err(CalcError::ConsecutiveTildes { offset: pair[1].offset });
            },
            (TokenKind::LeftParen, TokenKind::RightParen) => {
                return Err(CalcError::invalid_at("empty parentheses", pair[0].offset));
            },
            _ => {},
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn minus_is_lexed_as_binary_sub() {
        assert_eq!(kinds("-3"),
                   [TokenKind::Operator(Operator::Sub), TokenKind::Number(3.0)]);
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(kinds("3.25"), [TokenKind::Number(3.25)]);
        assert_eq!(kinds("7."), [TokenKind::Number(7.0)]);
        assert_eq!(kinds(".5"), [TokenKind::Number(0.5)]);
    }

    #[test]
    fn offsets_skip_whitespace() {
        let offsets: Vec<_> = tokenize(" 10  +\t2 ").unwrap()
                                                   .into_iter()
                                                   .map(|t| t.offset)
                                                   .collect();
        assert_eq!(offsets, [0, 2, 3]);
    }

    #[test]
    fn whitespace_separates_numbers() {
        assert_eq!(kinds("1 2"), [TokenKind::Number(1.0), TokenKind::Number(2.0)]);
    }

    #[test]
    fn invalid_character_is_located() {
        assert_eq!(tokenize("2 + a").unwrap_err(),
                   CalcError::InvalidCharacter { character: 'a',
                                                 offset:    2, });
        assert_eq!(tokenize("2+ג").unwrap_err(),
                   CalcError::InvalidCharacter { character: 'ג',
                                                 offset:    2, });
    }

    #[test]
    fn malformed_numbers_are_invalid_tokens() {
        assert_eq!(tokenize("1+1.2.3").unwrap_err(),
                   CalcError::InvalidToken { token:  "1.2.3".to_string(),
                                             offset: 2, });
        assert!(matches!(tokenize(".").unwrap_err(), CalcError::InvalidToken { offset: 0, .. }));
    }

    #[test]
    fn huge_literal_is_out_of_range() {
        let literal = "9".repeat(400);
        assert!(matches!(tokenize(&literal).unwrap_err(),
                         CalcError::RangeExceeded { offset: Some(0), .. }));
    }

    #[test]
    fn literal_above_result_ceiling_is_out_of_range() {
        let literal = format!("1+17{}", "0".repeat(307));
        assert!(matches!(tokenize(&literal).unwrap_err(),
                         CalcError::RangeExceeded { offset: Some(2), .. }));
        assert!(tokenize(&format!("1{}", "0".repeat(308))).is_ok());
    }

    #[test]
    fn consecutive_tildes_point_at_second() {
        assert_eq!(tokenize("3+~ ~2").unwrap_err(),
                   CalcError::ConsecutiveTildes { offset: 3 });
    }

    #[test]
    fn empty_parentheses_are_rejected() {
        assert!(matches!(tokenize("2*( )").unwrap_err(),
                         CalcError::InvalidExpression { offset: Some(2), .. }));
    }
}
