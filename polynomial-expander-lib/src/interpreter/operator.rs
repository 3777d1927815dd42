use crate::interpreter::algebra::polynomial::Polynomial;
use crate::interpreter::error::Result;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Exponentiate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Exponentiate => Token::Caret,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract | BinaryOperator::Multiply => {
                Associativity::Left
            }
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 2,
            BinaryOperator::Multiply => 3,
            BinaryOperator::Exponentiate => 4,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Whether `self`, sitting on the operator stack, has to be output before
    /// `incoming` is pushed on top of it.
    pub(crate) fn binds_before(&self, incoming: &Self) -> bool {
        self.precedence_gt(incoming)
            || (self.precedence_eq(incoming) && incoming.associativity() == Associativity::Left)
    }

    pub fn evaluate(&self, left: &Polynomial, right: &Polynomial) -> Result<Polynomial> {
        match self {
            BinaryOperator::Add => left.add(right),
            BinaryOperator::Subtract => left.sub(right),
            BinaryOperator::Multiply => left.mul(right),
            BinaryOperator::Exponentiate => left.pow(right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
