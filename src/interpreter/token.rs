use std::fmt;

use crate::interpreter::operator::{Fixity, Operator};

/// What a token is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// An unsigned numeric literal.
    Number(f64),
    /// An operator; `-` only becomes [`Operator::Neg`] after normalization.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// A token and the offset of its first character in the whitespace-stripped
/// input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// Character index of the token in the whitespace-stripped input.
    pub offset: usize,
}

impl Token {
    /// Creates a token of `kind` starting at `offset`.
    #[must_use]
    pub const fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Returns the operator if this is an operator token.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns `true` if a complete operand ends with this token: a number, a
    /// closing parenthesis or a postfix operator.
    #[must_use]
    pub fn ends_operand(&self) -> bool {
        match self.kind {
            TokenKind::Number(_) | TokenKind::RightParen => true,
            TokenKind::Operator(op) => op.fixity() == Fixity::Postfix,
            TokenKind::LeftParen => false,
        }
    }

    /// Returns the token as the user typed it, so a unary minus reads `-`
    /// rather than `u-`.
    #[must_use]
    pub fn spelling(&self) -> String {
        match self.kind {
            TokenKind::Operator(op) => op.spelling().to_string(),
            _ => self.to_string(),
        }
    }

    /// Returns `true` for `u-` and `~`.
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.operator().is_some_and(|op| op.fixity() == Fixity::Prefix)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
        }
    }
}
