/// The operator registry.
///
/// A fixed, read-only table of every operator with its symbol, precedence,
/// associativity, fixity and evaluation rule. All other stages consult it.
pub mod operator;
/// Tokens and their source offsets.
pub mod token;
/// The lexer turns raw text into tokens.
///
/// Scans the input with a `logos` lexer, skips whitespace, validates numeric
/// literals and records each token's offset in the whitespace-stripped text.
///
/// # Responsibilities
/// - Recognises numbers, operator symbols and parentheses.
/// - Reports invalid characters, malformed numbers, consecutive `~` and empty
///   parentheses.
pub mod lexer;
/// Resolves the arity of `-` from context and checks operator placement.
pub mod normalizer;
/// The parser converts infix tokens into a postfix plan.
///
/// Implements the shunting-yard algorithm with support for prefix and postfix
/// unary operators.
///
/// # Responsibilities
/// - Orders operators by precedence and associativity.
/// - Matches parentheses, reporting the offset of an unmatched one.
pub mod parser;
/// The evaluator executes a postfix plan.
///
/// # Responsibilities
/// - Applies each operator to the right number of operands.
/// - Reports missing operands, leftover values and arithmetic failures such
///   as division by zero or out-of-range results.
pub mod evaluator;
