use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{PositionedToken, Token};
use std::collections::VecDeque;

/// Reorders infix tokens into postfix order with the shunting-yard algorithm.
///
/// Every token keeps its position, so later passes can still point at the
/// source text. Operands are not checked here. `+` on its own converts fine and
/// is rejected once the postfix tokens are evaluated.
pub fn infix_to_postfix(original_tokens: Vec<PositionedToken>) -> Result<Vec<PositionedToken>> {
    let mut tokens: VecDeque<PositionedToken> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<PositionedToken> = VecDeque::new();
    let mut output: Vec<PositionedToken> = vec![];
    while let Some((position, token)) = tokens.pop_front() {
        match token {
            Token::Constant(_) | Token::Variable(_) => output.push((position, token)),
            Token::LeftParentheses => operators.push_front((position, token)),
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output, position)?
            }
            Token::Plus | Token::Dash | Token::Asterisk | Token::Caret => {
                parse_operator_token(&mut operators, &mut output, position, token)
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<PositionedToken>,
    output: &mut Vec<PositionedToken>,
) -> Result<()> {
    while let Some((position, operator)) = operators.pop_front() {
        match operator {
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ExpressionError::UnbalancedParenthesis { position });
            }
            operator => output.push((position, operator)),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<PositionedToken>,
    output: &mut Vec<PositionedToken>,
    position: usize,
) -> Result<()> {
    loop {
        match operators.pop_front() {
            None => return Err(ExpressionError::UnbalancedParenthesis { position }),
            // Discard the open parenthesis.
            Some((_, Token::LeftParentheses)) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<PositionedToken>,
    output: &mut Vec<PositionedToken>,
    position: usize,
    token: Token,
) {
    if let Some(operator) = token.operator() {
        while let Some(other_operator) = top_operator(operators) {
            if !other_operator.binds_before(&operator) {
                break;
            }
            if let Some(other_operator_token) = operators.pop_front() {
                output.push(other_operator_token);
            }
        }
    }

    operators.push_front((position, token));
}

/// The operator on top of the stack, or `None` when the stack is empty or an
/// open parenthesis is on top.
fn top_operator(operators: &VecDeque<PositionedToken>) -> Option<BinaryOperator> {
    operators
        .front()
        .and_then(|(_, top_of_operator_stack)| top_of_operator_stack.operator())
}
