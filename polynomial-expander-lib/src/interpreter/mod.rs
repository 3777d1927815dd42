pub mod algebra;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::algebra::polynomial::Polynomial;
use crate::interpreter::error::Result;
use crate::interpreter::evaluator::evaluate_positioned;
use crate::interpreter::parser::explicit_multiplication::insert_explicit_multiplication;
use crate::interpreter::token::{without_positions, PositionedToken, Token};
use itertools::Itertools;
use log::debug;

/// The order in which tokens are written out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// Operators between their operands, with implied multiplication made explicit.
    Infix,
    /// Operators after their operands (reverse Polish notation).
    Postfix,
}

/// Expands the given expression into a sum of monomials with like terms merged.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The expanded polynomial, in text.
///
/// # Examples
///
/// ```
/// use polynomial_expander::interpreter::expand;
/// # use polynomial_expander::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// let expanded = expand("(x + 1)^2")?;
/// assert_eq!(expanded, "x^2 + 2*x + 1");
/// # Ok(()) }
/// ```
pub fn expand(expression: &str) -> Result<String> {
    let infix_tokens = lexer::tokenize_positioned(expression)?;
    let polynomial = convert(infix_tokens)?;
    Ok(polynomial.to_string())
}

/// Converts the given infix tokens into the polynomial they describe.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens of an expression, in infix format, with the
///   positions errors are reported at.
///
/// returns: The expanded and collected polynomial.
pub fn convert(infix_tokens: Vec<PositionedToken>) -> Result<Polynomial> {
    let postfix_tokens = parser::parse(infix_tokens)?;
    let polynomial = evaluate_positioned(postfix_tokens)?;
    debug!("expanded polynomial: {}", polynomial);
    Ok(polynomial)
}

/// Writes the given expression out in a canonical, space-separated form.
///
/// # Examples
///
/// ```
/// use polynomial_expander::interpreter::{format, Notation};
/// # use polynomial_expander::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// assert_eq!(format("2 x(y+1)", Notation::Infix)?, "2 * x * ( y + 1 )");
/// assert_eq!(format("2 x(y+1)", Notation::Postfix)?, "2 x * y 1 + *");
/// assert_eq!(format("2x", Notation::Infix)?, "2x");
/// # Ok(()) }
/// ```
pub fn format(expression: &str, notation: Notation) -> Result<String> {
    let infix_tokens = lexer::tokenize_positioned(expression)?;
    let tokens = format_tokens(infix_tokens, notation)?;
    Ok(tokens_to_string(&tokens))
}

/// Rearranges infix tokens into the given notation.
pub fn format_tokens(
    infix_tokens: Vec<PositionedToken>,
    notation: Notation,
) -> Result<Vec<Token>> {
    let tokens = match notation {
        Notation::Infix => insert_explicit_multiplication(infix_tokens),
        Notation::Postfix => parser::parse(infix_tokens)?,
    };
    Ok(without_positions(tokens))
}

/// Prints the given tokens separated by single spaces.
///
/// # Examples
///
/// ```
/// use polynomial_expander::interpreter::tokens_to_string;
/// use polynomial_expander::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Variable("x".to_string()),
///     Token::Constant(2),
///     Token::Caret,
/// ];
/// assert_eq!(tokens_to_string(&tokens), "x 2 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
