use thiserror::Error;

/// Everything that can go wrong while turning text into a polynomial.
///
/// The first error encountered aborts the pass that produced it.
#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("unexpected input '{text}' at position {position}: {reason}")]
    Lex {
        position: usize,
        text: String,
        reason: &'static str,
    },

    #[error("mismatched parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    #[error("malformed expression at position {position}: {reason}")]
    MalformedExpression { position: usize, reason: String },

    #[error("invalid exponent '{exponent}': exponents must be a single positive integer")]
    InvalidExponent { exponent: String },

    #[error("coefficient does not fit in 64 bits")]
    Overflow,

    #[error("expansion exceeds the maximum {measure} of {limit}")]
    TooLarge { measure: &'static str, limit: usize },

    #[error("could not read expression")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExpressionError>;
