use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        operator::{OperatorDef, Rule},
        parser::PostfixItem,
    },
};

/// Evaluates a postfix plan with a single value stack.
///
/// Numbers are pushed; each operator pops as many operands as its arity,
/// applies its rule and pushes the result. For binary operators the most
/// recently pushed value is the right-hand operand.
///
/// # Errors
/// - `MissingOperand` if an operator finds too few values on the stack.
/// - `InvalidExpression` if the plan leaves no value or more than one.
/// - Any error raised by an operator's rule.
///
/// # Example
/// ```
/// use opcalc::interpreter::{
///     evaluator::core::evaluate,
///     operator::Operator,
///     parser::PostfixItem,
/// };
///
/// let plan = [PostfixItem::Number { value: 7.0, offset: 0 },
///             PostfixItem::Number { value: 2.0, offset: 2 },
///             PostfixItem::Operator { operator: Operator::Sub, offset: 1 }];
/// assert_eq!(evaluate(&plan).unwrap(), 5.0);
/// ```
pub fn evaluate(items: &[PostfixItem]) -> CalcResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(items.len());

    for item in items {
        match *item {
            PostfixItem::Number { value, .. } => stack.push(value),
            PostfixItem::Operator { operator, offset } => {
                let def = operator.definition();
                let result = match def.rule {
                    Rule::Unary(apply) => {
                        let operand = pop_operand(&mut stack, def, offset)?;
                        apply(operand, offset)?
                    },
                    Rule::Binary(apply) => {
                        let right = pop_operand(&mut stack, def, offset)?;
                        let left = pop_operand(&mut stack, def, offset)?;
                        apply(left, right, offset)?
                    },
                };
                log::trace!("applied '{operator}' -> {result}");
                stack.push(result);
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(CalcError::InvalidExpression { message: "nothing to evaluate".to_string(),
                                                 offset:  None, }),
        _ => Err(CalcError::InvalidExpression { message: "too many values".to_string(),
                                                offset:  None, }),
    }
}

fn pop_operand(stack: &mut Vec<f64>, def: &OperatorDef, offset: usize) -> CalcResult<f64> {
    stack.pop()
         .ok_or(CalcError::MissingOperand { symbol: def.symbol,
                                            offset })
}
