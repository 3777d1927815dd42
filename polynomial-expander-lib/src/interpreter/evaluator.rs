use crate::interpreter::algebra::polynomial::Polynomial;
use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::token::{positioned_by_index, PositionedToken, Token};
use log::trace;

/// Evaluates postfix tokens into a single polynomial.
///
/// Constants and variables are pushed as one-term polynomials. An operator pops
/// its right operand first and its left operand second, so `1 5 -` is `1 - 5`.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to evaluate.
///
/// returns: The expanded polynomial the tokens describe.
///
/// # Examples
///
/// ```
/// # use polynomial_expander::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use polynomial_expander::interpreter::evaluator::evaluate;
/// use polynomial_expander::interpreter::token::Token;
///
/// let postfix_tokens = vec![Token::Constant(1), Token::Constant(5), Token::Dash];
/// let polynomial = evaluate(postfix_tokens)?;
/// assert_eq!(polynomial.to_string(), "-4");
/// # Ok(()) }
/// ```
pub fn evaluate(tokens: Vec<Token>) -> Result<Polynomial> {
    evaluate_positioned(positioned_by_index(tokens))
}

/// Evaluates postfix tokens like [`evaluate`], reporting errors at the
/// positions the tokens carry.
///
/// A missing operand is reported at its operator. Operands left over at the end
/// are reported at the first one that was never consumed.
pub fn evaluate_positioned(mut tokens: Vec<PositionedToken>) -> Result<Polynomial> {
    tokens.reverse();
    let mut operands: Vec<(usize, Polynomial)> = Vec::new();

    while let Some((position, token)) = tokens.pop() {
        if token.is_value() {
            operands.push((position, Polynomial::new(token)?));
            continue;
        }

        let operator = token
            .operator()
            .ok_or_else(|| ExpressionError::MalformedExpression {
                position,
                reason: format!("'{}' should not be present in postfix tokens", token),
            })?;
        let missing_operand = || ExpressionError::MalformedExpression {
            position,
            reason: format!("'{}' needs two operands", token),
        };
        let (_, right_operand) = operands.pop().ok_or_else(missing_operand)?;
        let (_, left_operand) = operands.pop().ok_or_else(missing_operand)?;

        let result = operator.evaluate(&left_operand, &right_operand)?;
        trace!("({}) {} ({}) = {}", left_operand, operator, right_operand, result);
        operands.push((position, result));
    }

    let remaining = operands.len();
    let mut operands = operands.into_iter();
    match (operands.next(), operands.next()) {
        (Some((_, result)), None) => Ok(result),
        (None, _) => Err(ExpressionError::MalformedExpression {
            position: 0,
            reason: "there is nothing to evaluate".into(),
        }),
        (Some(_), Some((position, _))) => Err(ExpressionError::MalformedExpression {
            position,
            reason: format!("expected exactly one result but found {}", remaining),
        }),
    }
}
