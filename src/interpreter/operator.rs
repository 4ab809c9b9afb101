use crate::{
    error::CalcResult,
    interpreter::evaluator::{binary, unary},
};

/// Every operator the calculator understands.
///
/// The discriminant of each variant is its index in [`REGISTRY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-` between two operands.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `$`, the larger of two operands.
    Max,
    /// `&`, the smaller of two operands.
    Min,
    /// `@`, the mean of two operands.
    Avg,
    /// `-` in prefix position, written `u-` once normalized.
    Neg,
    /// `~`, prefix negation.
    Tilde,
    /// `!`, postfix factorial.
    Factorial,
    /// `#`, postfix digit sum.
    DigitSum,
}

/// How equal-precedence operators group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Where an operator sits relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    /// Before its single operand, like `~3`.
    Prefix,
    /// Between two operands, like `2 + 3`.
    Infix,
    /// After its single operand, like `5!`.
    Postfix,
}

/// The evaluation rule of an operator. The variant fixes the arity.
///
/// Rules receive the source offset of the operator so failures can point at
/// it.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Consumes one operand.
    Unary(fn(f64, usize) -> CalcResult<f64>),
    /// Consumes a left and a right operand.
    Binary(fn(f64, f64, usize) -> CalcResult<f64>),
}

/// An immutable operator definition.
#[derive(Debug)]
pub struct OperatorDef {
    /// The operator this entry describes.
    pub operator:      Operator,
    /// The token text. `u-` is never typed; it is produced by the normalizer.
    pub symbol:        &'static str,
    /// Higher binds tighter.
    pub precedence:    u8,
    /// Tie-break between equal precedences.
    pub associativity: Associativity,
    /// Position relative to the operands.
    pub fixity:        Fixity,
    /// How the result is computed.
    pub rule:          Rule,
}

impl OperatorDef {
    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.rule {
            Rule::Unary(_) => 1,
            Rule::Binary(_) => 2,
        }
    }

    /// Returns `true` if `pending`, already waiting on the operator stack,
    /// must be emitted before `self` is placed.
    ///
    /// Left-associative operators yield to anything of equal or higher
    /// precedence, right-associative ones only to strictly higher.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::operator::Operator;
    ///
    /// let sub = Operator::Sub.definition();
    /// let pow = Operator::Pow.definition();
    ///
    /// assert!(sub.yields_to(sub));
    /// assert!(!pow.yields_to(pow));
    /// assert!(sub.yields_to(pow));
    /// ```
    #[must_use]
    pub const fn yields_to(&self, pending: &Self) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence <= pending.precedence,
            Associativity::Right => self.precedence < pending.precedence,
        }
    }
}

/// The operator table, built once and never mutated.
pub static REGISTRY: [OperatorDef; 13] = [
    OperatorDef { operator:      Operator::Add,
                  symbol:        "+",
                  precedence:    1,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::add), },
    OperatorDef { operator:      Operator::Sub,
                  symbol:        "-",
                  precedence:    1,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::subtract), },
    OperatorDef { operator:      Operator::Mul,
                  symbol:        "*",
                  precedence:    2,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::multiply), },
    OperatorDef { operator:      Operator::Div,
                  symbol:        "/",
                  precedence:    2,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::divide), },
    OperatorDef { operator:      Operator::Mod,
                  symbol:        "%",
                  precedence:    3,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::modulo), },
    OperatorDef { operator:      Operator::Pow,
                  symbol:        "^",
                  precedence:    4,
                  associativity: Associativity::Right,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::power), },
    OperatorDef { operator:      Operator::Max,
                  symbol:        "$",
                  precedence:    5,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::maximum), },
    OperatorDef { operator:      Operator::Min,
                  symbol:        "&",
                  precedence:    5,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::minimum), },
    OperatorDef { operator:      Operator::Avg,
                  symbol:        "@",
                  precedence:    5,
                  associativity: Associativity::Left,
                  fixity:        Fixity::Infix,
                  rule:          Rule::Binary(binary::mean), },
    OperatorDef { operator:      Operator::Neg,
                  symbol:        "u-",
                  precedence:    3,
                  associativity: Associativity::Right,
                  fixity:        Fixity::Prefix,
                  rule:          Rule::Unary(unary::negate), },
    OperatorDef { operator:      Operator::Tilde,
                  symbol:        "~",
                  precedence:    6,
                  associativity: Associativity::Right,
                  fixity:        Fixity::Prefix,
                  rule:          Rule::Unary(unary::negate), },
    OperatorDef { operator:      Operator::Factorial,
                  symbol:        "!",
                  precedence:    6,
                  associativity: Associativity::Right,
                  fixity:        Fixity::Postfix,
                  rule:          Rule::Unary(unary::factorial), },
    OperatorDef { operator:      Operator::DigitSum,
                  symbol:        "#",
                  precedence:    6,
                  associativity: Associativity::Right,
                  fixity:        Fixity::Postfix,
                  rule:          Rule::Unary(unary::digit_sum), },
];

/// Looks up an operator definition by its symbol.
///
/// # Example
/// ```
/// use opcalc::interpreter::operator::{Fixity, lookup};
///
/// let bang = lookup("!").unwrap();
/// assert_eq!(bang.fixity, Fixity::Postfix);
/// assert_eq!(bang.arity(), 1);
/// assert!(lookup("?").is_none());
/// ```
#[must_use]
pub fn lookup(symbol: &str) -> Option<&'static OperatorDef> {
    REGISTRY.iter().find(|def| def.symbol == symbol)
}

impl Operator {
    /// Returns the registry entry for this operator.
    #[must_use]
    pub fn definition(self) -> &'static OperatorDef {
        &REGISTRY[self as usize]
    }

    /// Returns the operator's symbol, e.g. `"u-"` for [`Operator::Neg`].
    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.definition().symbol
    }

    /// Returns the operator as it is written in an expression. This differs
    /// from [`symbol`](Self::symbol) only for [`Operator::Neg`], which is
    /// typed as `-`.
    #[must_use]
    pub fn spelling(self) -> &'static str {
        match self {
            Self::Neg => "-",
            _ => self.symbol(),
        }
    }

    /// Returns the operator's fixity.
    #[must_use]
    pub fn fixity(self) -> Fixity {
        self.definition().fixity
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
