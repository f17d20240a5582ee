use thiserror::Error;

use super::tokenizer::{tokenize, Operator, Token};

const DECIMAL_PLACES: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Expression contains nothing to evaluate")]
    Empty,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unbalanced parentheses")]
    UnbalancedParens,

    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(char),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result of '{0}' is not a finite number")]
    NonFinite(char),

    #[error("Expression left {0} values without an operator")]
    LeftoverOperands(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Op(Operator),
    LParen,
}

/// Evaluate an arithmetic expression with the usual precedence rules.
///
/// The result is rounded to four decimal places. Any malformed input or
/// arithmetic failure is reported as an `EvalError`; nothing here panics.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expression);
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    let value = evaluate_tokens(&tokens)?;
    Ok(round_to_places(value))
}

/// Two-stack shunting-yard evaluation, applying operators as soon as
/// precedence allows instead of building an RPN queue.
fn evaluate_tokens(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::new();
    let mut operators: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(raw) => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| EvalError::InvalidNumber(raw.clone()))?;
                values.push(value);
            }
            Token::LParen => operators.push(Pending::LParen),
            Token::RParen => loop {
                match operators.pop() {
                    Some(Pending::LParen) => break,
                    Some(Pending::Op(op)) => apply(op, &mut values)?,
                    None => return Err(EvalError::UnbalancedParens),
                }
            },
            Token::Op(op) => {
                while let Some(&Pending::Op(top)) = operators.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    operators.pop();
                    apply(top, &mut values)?;
                }
                operators.push(Pending::Op(*op));
            }
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Op(op) => apply(op, &mut values)?,
            Pending::LParen => return Err(EvalError::UnbalancedParens),
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        [] => Err(EvalError::Empty),
        rest => Err(EvalError::LeftoverOperands(rest.len())),
    }
}

fn apply(op: Operator, values: &mut Vec<f64>) -> Result<(), EvalError> {
    let b = values.pop().ok_or(EvalError::MissingOperand(op.symbol()))?;
    let a = values.pop().ok_or(EvalError::MissingOperand(op.symbol()))?;

    let result = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Operator::Pow => a.powf(b),
    };

    if !result.is_finite() {
        return Err(EvalError::NonFinite(op.symbol()));
    }
    values.push(result);
    Ok(())
}

/// Round half to even on the exact binary value, so `1/32` (exactly
/// 0.03125) gives 0.0312. Float formatting rounds exactly, scaling by 10^4
/// first would not.
fn round_to_places(value: f64) -> f64 {
    format!("{:.*}", DECIMAL_PLACES, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_simple_addition() {
        assert_eq!(evaluate("2 + 2"), Ok(4.0));
    }

    #[test]
    fn evaluate_respects_parentheses() {
        assert_eq!(evaluate("2 * (3 + 4)"), Ok(14.0));
    }

    #[test]
    fn evaluate_multiplication_binds_tighter_than_addition() {
        assert_eq!(
            evaluate("2 + 3 * 4"),
            Ok(14.0),
            "evaluate: precedence should give 14, not 20"
        );
    }

    #[test]
    fn evaluate_left_to_right_on_equal_precedence() {
        assert_eq!(evaluate("10 - 4 - 3"), Ok(3.0));
        assert_eq!(evaluate("100 / 10 / 5"), Ok(2.0));
    }

    #[test]
    fn evaluate_power_is_left_associative() {
        assert_eq!(
            evaluate("2^3^2"),
            Ok(64.0),
            "evaluate: ^ applies left to right, (2^3)^2"
        );
        assert_eq!(evaluate("2 * 3 ^ 2"), Ok(18.0));
    }

    #[test]
    fn evaluate_rounds_to_four_decimals() {
        assert_eq!(evaluate("10 / 3"), Ok(3.3333));
        assert_eq!(evaluate("2 / 3"), Ok(0.6667));
        assert_eq!(evaluate("0.1 + 0.2"), Ok(0.3));
    }

    #[test]
    fn evaluate_rounds_exact_ties_to_even() {
        assert_eq!(evaluate("1/32"), Ok(0.0312));
        assert_eq!(evaluate("3/32"), Ok(0.0938));
        assert_eq!(
            evaluate("5/32"),
            Ok(0.1562),
            "evaluate: 0.15625 is exact and should round to the even digit"
        );
    }

    #[test]
    fn evaluate_decimal_operands() {
        assert_eq!(evaluate("1.5 * 4"), Ok(6.0));
    }

    #[test]
    fn evaluate_division_by_zero_fails() {
        assert_eq!(evaluate("10 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1 / (2 - 2)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn evaluate_unmatched_closing_paren_fails() {
        assert_eq!(evaluate("2 + 3)"), Err(EvalError::UnbalancedParens));
        assert_eq!(evaluate(")"), Err(EvalError::UnbalancedParens));
    }

    #[test]
    fn evaluate_unclosed_paren_fails() {
        assert_eq!(evaluate("sqrt("), Err(EvalError::UnbalancedParens));
        assert_eq!(evaluate("(2 + 3"), Err(EvalError::UnbalancedParens));
    }

    #[test]
    fn evaluate_empty_or_unrecognized_input_has_no_result() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("abc"), Err(EvalError::Empty));
        assert_eq!(evaluate("()"), Err(EvalError::Empty));
    }

    #[test]
    fn evaluate_missing_operand_fails() {
        assert_eq!(evaluate("-3"), Err(EvalError::MissingOperand('-')));
        assert_eq!(evaluate("2 +"), Err(EvalError::MissingOperand('+')));
    }

    #[test]
    fn evaluate_multiple_decimal_points_fails_at_parse() {
        assert_eq!(
            evaluate("1.2.3 + 1"),
            Err(EvalError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn evaluate_adjacent_groups_leave_operands() {
        assert_eq!(evaluate("(2)(3)"), Err(EvalError::LeftoverOperands(2)));
    }

    #[test]
    fn evaluate_overflow_is_not_returned_as_infinity() {
        assert_eq!(evaluate("10 ^ 1000"), Err(EvalError::NonFinite('^')));
    }

    #[test]
    fn evaluate_ignores_unrecognized_characters() {
        assert_eq!(evaluate("2 + 3abc"), Ok(5.0));
        assert_eq!(
            evaluate("2 x 3"),
            Err(EvalError::LeftoverOperands(2)),
            "evaluate: a dropped letter still separates two numbers"
        );
    }
}
