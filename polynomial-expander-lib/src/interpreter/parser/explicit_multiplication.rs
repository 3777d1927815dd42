use crate::interpreter::token::{PositionedToken, Token};
use itertools::Itertools;

/// Makes implied multiplication explicit by putting a `*` between two adjacent
/// operands, e.g. `2 x` becomes `2 * x` and `(a)(b)` becomes `(a) * (b)`.
///
/// Note that `2x` is a single variable and is left alone. An inserted `*` takes
/// the position of the operand that follows it.
pub fn insert_explicit_multiplication(tokens: Vec<PositionedToken>) -> Vec<PositionedToken> {
    let implied_count = tokens
        .iter()
        .tuple_windows()
        .filter(|((_, left), (_, right))| is_implied_multiplication(left, right))
        .count();
    if implied_count == 0 {
        return tokens;
    }

    let mut explicit: Vec<PositionedToken> = Vec::with_capacity(tokens.len() + implied_count);
    for (position, token) in tokens {
        let implied = explicit
            .last()
            .map_or(false, |(_, previous)| is_implied_multiplication(previous, &token));
        if implied {
            explicit.push((position, Token::Asterisk));
        }
        explicit.push((position, token));
    }
    explicit
}

fn ends_operand(token: &Token) -> bool {
    token.is_value() || *token == Token::RightParentheses
}

fn starts_operand(token: &Token) -> bool {
    token.is_value() || *token == Token::LeftParentheses
}

fn is_implied_multiplication(left: &Token, right: &Token) -> bool {
    ends_operand(left) && starts_operand(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::{tokenize, tokenize_positioned};
    use crate::interpreter::token::without_positions;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[parameterized(
    implicit = {
    "2 x",
    "x (y + z)",
    "(a) (b)",
    "(a) 3",
    "2 x y",
    "2x y",
    "x + y",
    "x ^ 2",
    "(x)",
    },
    explicit = {
    "2 * x",
    "x * (y + z)",
    "(a) * (b)",
    "(a) * 3",
    "2 * x * y",
    "2x * y",
    "x + y",
    "x ^ 2",
    "(x)",
    }
    )]
    fn adjacent_operands_get_an_asterisk_between_them(implicit: &str, explicit: &str) {
        let actual = insert_explicit_multiplication(tokenize_positioned(implicit).unwrap());

        assert_eq!(without_positions(actual), tokenize(explicit).unwrap())
    }

    #[test]
    fn letters_after_digits_are_not_split() {
        let tokens = tokenize_positioned("3ab").unwrap();

        let actual = insert_explicit_multiplication(tokens.clone());

        assert_eq!(actual, tokens)
    }

    #[test]
    fn inserted_asterisk_takes_the_position_of_the_next_operand() {
        let actual = insert_explicit_multiplication(tokenize_positioned("2x (y)").unwrap());

        assert_eq!(
            actual,
            vec![
                (0, Token::Variable("2x".into())),
                (3, Token::Asterisk),
                (3, Token::LeftParentheses),
                (4, Token::Variable("y".into())),
                (5, Token::RightParentheses),
            ]
        )
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(
            insert_explicit_multiplication(vec![]),
            Vec::<PositionedToken>::new()
        )
    }
}
