pub mod explicit_multiplication;
pub mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::explicit_multiplication::insert_explicit_multiplication;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::PositionedToken;
use log::debug;

/// Parses the given infix tokens into postfix order, ready for evaluation.
///
/// Implied multiplication between adjacent operands is made explicit first.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format, with their positions.
///
/// returns: The same expression in postfix format. Each token keeps its position.
///
/// # Examples
///
/// ```
/// # use polynomial_expander::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use polynomial_expander::interpreter::parser::parse;
/// use polynomial_expander::interpreter::token::{positioned_by_index, Token};
///
/// let infix_tokens = positioned_by_index(vec![
///     Token::Variable("x".to_string()),
///     Token::Caret,
///     Token::Constant(2),
/// ]);
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens.last(), Some(&(1, Token::Caret)));
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<PositionedToken>) -> Result<Vec<PositionedToken>> {
    let explicit_tokens = insert_explicit_multiplication(infix_tokens);
    let postfix_tokens = infix_to_postfix(explicit_tokens)?;
    debug!("postfix tokens: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
