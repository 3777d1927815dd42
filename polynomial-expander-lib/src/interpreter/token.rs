use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression.
///
/// Only the value tokens carry a payload, so a constant can never hold a name
/// and an operator can never hold a value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Constant(i64),
    Variable(String),
    Plus,
    Dash,
    Asterisk,
    Caret,
    LeftParentheses,
    RightParentheses,
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '^', '(', ')'];

/// A token paired with where it starts in the source text.
///
/// Tokens read from text carry their byte offset. Tokens built by hand are
/// usually numbered by their index instead, see [`positioned_by_index`].
pub type PositionedToken = (usize, Token);

/// Numbers the tokens by their index, for tokens that did not come from text.
pub fn positioned_by_index(tokens: Vec<Token>) -> Vec<PositionedToken> {
    tokens.into_iter().enumerate().collect()
}

pub fn without_positions(tokens: Vec<PositionedToken>) -> Vec<Token> {
    tokens.into_iter().map(|(_, token)| token).collect()
}

impl Token {
    /// A 'value' is a token that either represents, contains or is a numerical value.
    /// E.g. a constant or a variable.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Constant(_) | Token::Variable(_))
    }

    /// The binary operator this token stands for, if it is one.
    pub fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::Caret => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Constant(value) => write!(f, "{}", value),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Caret => write!(f, "^"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Token> {
        match input {
            "+" => Ok(Token::Plus),
            "-" => Ok(Token::Dash),
            "*" => Ok(Token::Asterisk),
            "^" => Ok(Token::Caret),
            "(" => Ok(Token::LeftParentheses),
            ")" => Ok(Token::RightParentheses),
            input => parse_constant_or_variable(input, 0),
        }
    }
}

/// Turns a run of ASCII letters and digits into a token.
///
/// A run made only of digits is a constant, anything else is a variable,
/// so `x1` is one variable and not `x` followed by `1`.
pub(crate) fn parse_constant_or_variable(text: &str, position: usize) -> Result<Token> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ExpressionError::Lex {
            position,
            text: text.to_string(),
            reason: "expected an integer or a variable name",
        });
    }

    if text.chars().all(|c| c.is_ascii_digit()) {
        text.parse::<i64>()
            .map(Token::Constant)
            .map_err(|_| ExpressionError::Lex {
                position,
                text: text.to_string(),
                reason: "integer does not fit in 64 bits",
            })
    } else {
        Ok(Token::Variable(text.to_string()))
    }
}
