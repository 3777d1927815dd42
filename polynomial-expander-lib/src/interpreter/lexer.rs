use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::token::{
    parse_constant_or_variable, without_positions, PositionedToken, Token, SYMBOLS,
};
use log::trace;
use std::io::Read;

/// Splits the given expression into its tokens.
///
/// Whitespace is skipped, each of `+ - * ^ ( )` is a token of its own and every
/// maximal run of ASCII letters and digits becomes a constant or a variable.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use polynomial_expander::interpreter::lexer::tokenize;
/// use polynomial_expander::interpreter::token::Token;
/// # use polynomial_expander::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("x^2")?;
/// assert_eq!(tokens, vec![Token::Variable("x".into()), Token::Caret, Token::Constant(2)]);
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    tokenize_positioned(expression).map(without_positions)
}

/// Splits the given expression into its tokens, each paired with the byte
/// offset it starts at. Later passes report errors at these offsets.
///
/// # Examples
///
/// ```
/// use polynomial_expander::interpreter::lexer::tokenize_positioned;
/// use polynomial_expander::interpreter::token::Token;
/// # use polynomial_expander::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize_positioned("2 ab")?;
/// assert_eq!(tokens, vec![(0, Token::Constant(2)), (2, Token::Variable("ab".into()))]);
/// # Ok(()) }
/// ```
pub fn tokenize_positioned(expression: &str) -> Result<Vec<PositionedToken>> {
    let mut tokens: Vec<PositionedToken> = Vec::new();
    let mut characters = expression.char_indices().peekable();

    while let Some((position, character)) = characters.next() {
        match character {
            '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' ' => continue,
            symbol if SYMBOLS.contains(&symbol) => {
                tokens.push((position, symbol.to_string().parse::<Token>()?))
            }
            first if first.is_ascii_alphanumeric() => {
                let mut end = position + first.len_utf8();
                while let Some((next_position, next)) =
                    characters.next_if(|(_, next)| next.is_ascii_alphanumeric())
                {
                    end = next_position + next.len_utf8();
                }
                let token = parse_constant_or_variable(&expression[position..end], position)?;
                tokens.push((position, token));
            }
            unexpected => {
                return Err(ExpressionError::Lex {
                    position,
                    text: unexpected.to_string(),
                    reason: "unexpected character",
                })
            }
        }
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

/// Reads the whole stream and splits it into positioned tokens, see [`tokenize_positioned`].
pub fn tokenize_reader(mut reader: impl Read) -> Result<Vec<PositionedToken>> {
    let mut expression = String::new();
    reader.read_to_string(&mut expression)?;
    tokenize_positioned(&expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn variable(name: &str) -> Token {
        Token::Variable(name.to_string())
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = tokenize("  \t  x \n +   \x0B 1\x0C     \r").unwrap();

        assert_eq!(tokens, vec![variable("x"), Token::Plus, Token::Constant(1)])
    }

    #[test]
    fn different_tokens_are_split_correctly() {
        let tokens = tokenize("x+y* z ^ w + ( x (y + z)^3 + 7 )").unwrap();

        assert_eq!(
            tokens,
            vec![
                variable("x"),
                Token::Plus,
                variable("y"),
                Token::Asterisk,
                variable("z"),
                Token::Caret,
                variable("w"),
                Token::Plus,
                Token::LeftParentheses,
                variable("x"),
                Token::LeftParentheses,
                variable("y"),
                Token::Plus,
                variable("z"),
                Token::RightParentheses,
                Token::Caret,
                Token::Constant(3),
                Token::Plus,
                Token::Constant(7),
                Token::RightParentheses,
            ]
        )
    }

    #[test]
    fn integer_on_its_own() {
        assert_eq!(tokenize("7").unwrap(), vec![Token::Constant(7)])
    }

    #[test]
    fn variable_on_its_own() {
        assert_eq!(tokenize("x").unwrap(), vec![variable("x")])
    }

    #[test]
    fn operator_on_its_own() {
        assert_eq!(tokenize("+").unwrap(), vec![Token::Plus])
    }

    #[test]
    fn parenthesis_on_its_own() {
        assert_eq!(tokenize("(").unwrap(), vec![Token::LeftParentheses])
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert_eq!(tokenize(" \n").unwrap(), Vec::<Token>::new())
    }

    #[test]
    fn letters_and_digits_form_one_variable() {
        let tokens = tokenize("x1*2y").unwrap();

        assert_eq!(tokens, vec![variable("x1"), Token::Asterisk, variable("2y")])
    }

    #[test]
    fn minus_is_never_part_of_a_constant() {
        let tokens = tokenize("-5").unwrap();

        assert_eq!(tokens, vec![Token::Dash, Token::Constant(5)])
    }

    #[test]
    fn overflowing_integer_reports_its_position() {
        let error = tokenize("x + 99999999999999999999").unwrap_err();

        match error {
            ExpressionError::Lex { position, text, .. } => {
                assert_eq!(position, 4);
                assert_eq!(text, "99999999999999999999");
            }
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn unexpected_character_reports_its_position() {
        let error = tokenize("a / b").unwrap_err();

        assert!(matches!(error, ExpressionError::Lex { position: 2, .. }))
    }

    #[test]
    fn reader_is_tokenized_like_a_string() {
        let tokens = tokenize_reader("2 * (a - b)".as_bytes()).unwrap();

        assert_eq!(tokens, tokenize_positioned("2 * (a - b)").unwrap())
    }

    #[test]
    fn tokens_carry_their_byte_offsets() {
        let tokens = tokenize_positioned(" 2x(\ty1 + 10)").unwrap();

        assert_eq!(
            tokens,
            vec![
                (1, variable("2x")),
                (3, Token::LeftParentheses),
                (5, variable("y1")),
                (8, Token::Plus),
                (10, Token::Constant(10)),
                (12, Token::RightParentheses),
            ]
        )
    }

    #[test]
    fn invalid_utf8_from_reader_is_an_io_error() {
        let bytes: &[u8] = &[b'x', 0xFF, 0xFE];

        let error = tokenize_reader(bytes).unwrap_err();

        assert!(matches!(error, ExpressionError::Io(_)))
    }
}
