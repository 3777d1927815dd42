use crate::interpreter::algebra::MAX_DEGREE;
use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter;

/// A single product term, e.g. `2 * a * x`, kept as the list of its factors.
///
/// Powers are not tracked separately: `x^3` is stored as three `x` factors.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
    factors: Vec<Token>,
}

impl Monomial {
    /// A monomial made of a single constant or variable.
    pub fn new(token: Token) -> Result<Monomial> {
        Self::from_tokens(vec![token])
    }

    /// A monomial made of the given factors, in the given order.
    ///
    /// Every factor must be a constant or a variable and there must be at least one.
    pub fn from_tokens(factors: Vec<Token>) -> Result<Monomial> {
        if let Some(position) = factors.iter().position(|factor| !factor.is_value()) {
            return Err(ExpressionError::MalformedExpression {
                position,
                reason: format!("'{}' can not be a factor of a monomial", factors[position]),
            });
        }
        if factors.is_empty() {
            return Err(ExpressionError::MalformedExpression {
                position: 0,
                reason: "a monomial needs at least one factor".into(),
            });
        }
        Ok(Monomial { factors })
    }

    /// A normalized monomial with the given coefficient and (sorted) variables.
    ///
    /// A coefficient of one is left out unless there are no variables.
    pub(crate) fn with_coefficient(coefficient: i64, variables: Vec<Token>) -> Monomial {
        let factors = if coefficient == 1 && !variables.is_empty() {
            variables
        } else {
            iter::once(Token::Constant(coefficient))
                .chain(variables)
                .collect()
        };
        Monomial { factors }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.factors
    }

    /// The leading constant of a normalized monomial, or one if it has none.
    pub fn coefficient(&self) -> i64 {
        match self.factors.first() {
            Some(Token::Constant(value)) => *value,
            _ => 1,
        }
    }

    /// The variables of a normalized monomial, i.e. everything after the coefficient.
    pub fn variables(&self) -> &[Token] {
        match self.factors.first() {
            Some(Token::Constant(_)) => &self.factors[1..],
            _ => &self.factors,
        }
    }

    pub fn degree(&self) -> usize {
        self.variables().len()
    }

    /// The value of the monomial if it is exactly one positive constant.
    pub fn as_positive_constant(&self) -> Option<i64> {
        match self.factors.as_slice() {
            [Token::Constant(value)] if *value > 0 => Some(*value),
            _ => None,
        }
    }

    /// Sorts the factors and folds all constants into a single leading one.
    ///
    /// Normalizing twice gives the same monomial as normalizing once.
    pub fn normalized(mut self) -> Result<Monomial> {
        self.factors.sort_by(compare_factors);

        let constant_count = self
            .factors
            .iter()
            .take_while(|factor| matches!(factor, Token::Constant(_)))
            .count();
        if constant_count > 1 {
            let product = self
                .factors
                .drain(..constant_count)
                .try_fold(1i64, |product, factor| match factor {
                    Token::Constant(value) => product.checked_mul(value),
                    _ => unreachable!("only constants are sorted before variables"),
                })
                .ok_or(ExpressionError::Overflow)?;
            self.factors.insert(0, Token::Constant(product));
        }

        Ok(self)
    }

    pub fn is_normalized(&self) -> bool {
        let is_sorted = self
            .factors
            .iter()
            .tuple_windows()
            .all(|(a, b)| compare_factors(a, b) != Ordering::Greater);
        let constant_count = self
            .factors
            .iter()
            .filter(|factor| matches!(factor, Token::Constant(_)))
            .count();
        is_sorted && constant_count <= 1
    }

    pub fn mul(&self, other: &Monomial) -> Result<Monomial> {
        let factors = self
            .factors
            .iter()
            .chain(other.factors.iter())
            .cloned()
            .collect();
        let product = Monomial { factors }.normalized()?;
        check_degree(Some(product.degree()))?;
        Ok(product)
    }

    /// Raises the monomial to a power by repeating every factor `exponent` times.
    ///
    /// The exponent has to be a single, strictly positive constant, and the
    /// result may not have a degree above [`MAX_DEGREE`].
    pub fn pow(&self, exponent: &Monomial) -> Result<Monomial> {
        let exponent_value =
            exponent
                .as_positive_constant()
                .ok_or_else(|| ExpressionError::InvalidExponent {
                    exponent: exponent.to_string(),
                })?;
        let repetitions = usize::try_from(exponent_value).map_err(|_| ExpressionError::Overflow)?;
        let base = self.clone().normalized()?;
        check_degree(base.degree().checked_mul(repetitions))?;

        let mut factors = Vec::new();
        if let Some(Token::Constant(value)) = base.factors.first() {
            factors.push(Token::Constant(constant_pow(*value, exponent_value)?));
        }
        for variable in base.variables() {
            factors.extend(iter::repeat(variable.clone()).take(repetitions));
        }

        Monomial { factors }.normalized()
    }

    pub fn negated(&self) -> Result<Monomial> {
        let coefficient = self
            .coefficient()
            .checked_neg()
            .ok_or(ExpressionError::Overflow)?;
        Ok(Self::with_coefficient(coefficient, self.variables().to_vec()))
    }
}

/// Constants sort before variables, constants by value and variables by name.
fn compare_factors(a: &Token, b: &Token) -> Ordering {
    match (a, b) {
        (Token::Constant(a), Token::Constant(b)) => a.cmp(b),
        (Token::Variable(a), Token::Variable(b)) => a.cmp(b),
        (Token::Constant(_), Token::Variable(_)) => Ordering::Less,
        (Token::Variable(_), Token::Constant(_)) => Ordering::Greater,
        _ => unreachable!("a monomial only contains constants and variables"),
    }
}

/// Fails unless the degree is known and at most [`MAX_DEGREE`].
pub(crate) fn check_degree(degree: Option<usize>) -> Result<()> {
    match degree {
        Some(degree) if degree <= MAX_DEGREE => Ok(()),
        _ => Err(ExpressionError::TooLarge {
            measure: "degree",
            limit: MAX_DEGREE,
        }),
    }
}

/// Same as multiplying `base` by itself `exponent` times.
fn constant_pow(base: i64, exponent: i64) -> Result<i64> {
    match base {
        0 | 1 => Ok(base),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|exponent| base.checked_pow(exponent))
            .ok_or(ExpressionError::Overflow),
    }
}

/// Writes sorted variables as a product, with repeated variables written as powers.
pub(crate) fn variables_to_string(variables: &[Token]) -> String {
    variables
        .iter()
        .group_by(|variable| *variable)
        .into_iter()
        .map(|(variable, group)| match group.count() {
            1 => variable.to_string(),
            power => format!("{}^{}", variable, power),
        })
        .join("*")
}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let variables = self.variables();
        match self.factors.first() {
            Some(Token::Constant(value)) if variables.is_empty() => write!(f, "{}", value),
            Some(Token::Constant(value)) => {
                write!(f, "{}*{}", value, variables_to_string(variables))
            }
            _ => write!(f, "{}", variables_to_string(variables)),
        }
    }
}

impl Debug for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.factors.iter()).finish()
    }
}
