use crate::{
    error::RuntimeError,
    rpn::{BinaryOperator, Postfix, UnaryOperator},
};

/// Reduces a postfix sequence to a single value over a value stack.
///
/// Operands push their value; a binary operator pops the two most recent
/// values and pushes `first OP second`, where `second` is the value popped
/// first (the right-hand operand in source order); a unary sign pops one
/// value and pushes it unchanged or negated.
///
/// Division performs no zero check: a zero right-hand operand yields a
/// signed infinity, or NaN for `0 / 0`, per IEEE-754.
///
/// # Parameters
/// - `postfix`: The sequencer's output, in evaluation order.
///
/// # Returns
/// The single value the expression reduces to.
///
/// # Errors
/// Returns a `RuntimeError` if:
/// - an operator finds too few values on the stack,
/// - the stack holds anything other than exactly one value at the end.
pub fn reduce(postfix: &[Postfix]) -> Result<f64, RuntimeError> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix.len());

    for item in postfix {
        match item {
            Postfix::Operand(value) => values.push(*value),
            Postfix::Binary(operator) => {
                let second = pop_operand(&mut values, operator)?;
                let first = pop_operand(&mut values, operator)?;
                values.push(apply_binary(*operator, first, second));
            },
            Postfix::Unary(operator) => {
                let value = pop_operand(&mut values, operator)?;
                values.push(match operator {
                                UnaryOperator::Plus => value,
                                UnaryOperator::Minus => -value,
                            });
            },
        }
    }

    if values.len() == 1 {
        Ok(values[0])
    } else {
        Err(RuntimeError::MalformedExpression { values: values.len() })
    }
}

fn pop_operand(values: &mut Vec<f64>, operator: impl std::fmt::Display) -> Result<f64, RuntimeError> {
    values.pop()
          .ok_or_else(|| RuntimeError::InsufficientOperands { operator: operator.to_string() })
}

fn apply_binary(operator: BinaryOperator, first: f64, second: f64) -> f64 {
    match operator {
        BinaryOperator::Add => first + second,
        BinaryOperator::Subtract => first - second,
        BinaryOperator::Multiply => first * second,
        BinaryOperator::Divide => first / second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_order_is_preserved() {
        // 10 4 - reduces to 10 - 4, not 4 - 10.
        let postfix = [Postfix::Operand(10.0),
                       Postfix::Operand(4.0),
                       Postfix::Binary(BinaryOperator::Subtract)];
        assert_eq!(reduce(&postfix), Ok(6.0));

        let postfix = [Postfix::Operand(10.0),
                       Postfix::Operand(4.0),
                       Postfix::Binary(BinaryOperator::Divide)];
        assert_eq!(reduce(&postfix), Ok(2.5));
    }

    #[test]
    fn unary_plus_is_a_no_op_and_unary_minus_negates() {
        let postfix = [Postfix::Operand(5.0), Postfix::Unary(UnaryOperator::Plus)];
        assert_eq!(reduce(&postfix), Ok(5.0));

        let postfix = [Postfix::Operand(5.0), Postfix::Unary(UnaryOperator::Minus)];
        assert_eq!(reduce(&postfix), Ok(-5.0));
    }

    #[test]
    fn division_by_zero_follows_ieee_semantics() {
        let postfix = [Postfix::Operand(10.0),
                       Postfix::Operand(0.0),
                       Postfix::Binary(BinaryOperator::Divide)];
        assert_eq!(reduce(&postfix), Ok(f64::INFINITY));

        let postfix = [Postfix::Operand(-10.0),
                       Postfix::Operand(0.0),
                       Postfix::Binary(BinaryOperator::Divide)];
        assert_eq!(reduce(&postfix), Ok(f64::NEG_INFINITY));

        let postfix = [Postfix::Operand(0.0),
                       Postfix::Operand(0.0),
                       Postfix::Binary(BinaryOperator::Divide)];
        assert!(reduce(&postfix).unwrap().is_nan());
    }

    #[test]
    fn operators_without_enough_operands_are_rejected() {
        let postfix = [Postfix::Operand(5.0), Postfix::Binary(BinaryOperator::Add)];
        assert_eq!(reduce(&postfix),
                   Err(RuntimeError::InsufficientOperands { operator: "+".to_string() }));

        let postfix = [Postfix::Unary(UnaryOperator::Minus)];
        assert_eq!(reduce(&postfix),
                   Err(RuntimeError::InsufficientOperands { operator: "-".to_string() }));
    }

    #[test]
    fn leftover_values_are_rejected() {
        let postfix = [Postfix::Operand(5.0), Postfix::Operand(3.0)];
        assert_eq!(reduce(&postfix),
                   Err(RuntimeError::MalformedExpression { values: 2 }));

        // An emptied-out sequence, e.g. from "( )".
        assert_eq!(reduce(&[]), Err(RuntimeError::MalformedExpression { values: 0 }));
    }
}
