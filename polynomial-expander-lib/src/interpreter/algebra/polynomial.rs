use crate::interpreter::algebra::monomial::{check_degree, variables_to_string, Monomial};
use crate::interpreter::algebra::MAX_FACTORS;
use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// A sum of monomials.
///
/// Every arithmetic operation returns a collected polynomial: like terms are
/// merged, terms that cancel out are dropped and the remaining terms are ordered
/// by descending degree, then by variable names. The zero polynomial has no terms.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    terms: Vec<Monomial>,
}

impl Polynomial {
    /// A polynomial with a single term made of one constant or variable.
    pub fn new(token: Token) -> Result<Polynomial> {
        Ok(Polynomial {
            terms: vec![Monomial::new(token)?],
        })
    }

    pub fn zero() -> Polynomial {
        Polynomial::default()
    }

    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|term| term.coefficient() == 0)
    }

    /// Merges like terms and puts them in canonical order.
    pub fn normalized(self) -> Result<Polynomial> {
        let mut terms = self
            .terms
            .into_iter()
            .map(Monomial::normalized)
            .collect::<Result<Vec<_>>>()?;
        terms.sort_by(compare_terms);

        let mut collected = vec![];
        for (variables, like_terms) in &terms
            .into_iter()
            .group_by(|term| term.variables().to_vec())
        {
            let coefficient = like_terms
                .map(|term| term.coefficient())
                .try_fold(0i64, |sum, coefficient| sum.checked_add(coefficient))
                .ok_or(ExpressionError::Overflow)?;
            if coefficient != 0 {
                collected.push(Monomial::with_coefficient(coefficient, variables));
            }
        }

        Ok(Polynomial { terms: collected })
    }

    pub fn add(&self, other: &Polynomial) -> Result<Polynomial> {
        let terms = self.terms.iter().chain(other.terms.iter()).cloned().collect();
        Polynomial { terms }.normalized()
    }

    pub fn sub(&self, other: &Polynomial) -> Result<Polynomial> {
        let negated = other
            .terms
            .iter()
            .map(Monomial::negated)
            .collect::<Result<Vec<_>>>()?;
        let terms = self.terms.iter().cloned().chain(negated).collect();
        Polynomial { terms }.normalized()
    }

    /// Multiplies every term of `self` with every term of `other`.
    ///
    /// Fails before multiplying if the products would hold more than
    /// [`MAX_FACTORS`] factors in total.
    pub fn mul(&self, other: &Polynomial) -> Result<Polynomial> {
        match self.product_size(other) {
            Some(size) if size <= MAX_FACTORS => {}
            _ => {
                return Err(ExpressionError::TooLarge {
                    measure: "number of factors",
                    limit: MAX_FACTORS,
                })
            }
        }

        let terms = self
            .terms
            .iter()
            .cartesian_product(other.terms.iter())
            .map(|(a, b)| a.mul(b))
            .collect::<Result<Vec<_>>>()?;
        Polynomial { terms }.normalized()
    }

    /// Raises the polynomial to a power by repeated multiplication.
    ///
    /// The exponent has to be a single, strictly positive constant. A power whose
    /// degree would pass [`MAX_DEGREE`](crate::interpreter::algebra::MAX_DEGREE)
    /// is rejected up front.
    pub fn pow(&self, exponent: &Polynomial) -> Result<Polynomial> {
        let exponent_term = match exponent.terms.as_slice() {
            [term] if term.as_positive_constant().is_some() => term,
            _ => {
                return Err(ExpressionError::InvalidExponent {
                    exponent: exponent.to_string(),
                })
            }
        };

        if let [base] = self.terms.as_slice() {
            let power = base.pow(exponent_term)?;
            return Polynomial { terms: vec![power] }.normalized();
        }

        let exponent_value = exponent_term.coefficient();
        let repetitions = usize::try_from(exponent_value).map_err(|_| ExpressionError::Overflow)?;
        check_degree(self.degree().checked_mul(repetitions))?;

        let mut power = self.clone().normalized()?;
        let mut remaining = exponent_value - 1;
        while remaining > 0 && !power.terms.is_empty() {
            power = power.mul(self)?;
            remaining -= 1;
        }
        Ok(power)
    }

    /// The highest degree of any term, zero for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.terms.iter().map(Monomial::degree).max().unwrap_or(0)
    }

    /// How many factors multiplying every term of `self` with every term of
    /// `other` takes, or `None` if that does not fit in a `usize`.
    fn product_size(&self, other: &Polynomial) -> Option<usize> {
        let factor_count = |polynomial: &Polynomial| -> usize {
            polynomial.terms.iter().map(|term| term.tokens().len()).sum()
        };
        let left = factor_count(self).checked_mul(other.terms.len())?;
        let right = factor_count(other).checked_mul(self.terms.len())?;
        left.checked_add(right)
    }
}

/// Higher degree first, then by variable names.
fn compare_terms(a: &Monomial, b: &Monomial) -> Ordering {
    let key = |term: &Monomial| {
        let names: Vec<String> = term.variables().iter().map(Token::to_string).collect();
        (Reverse(term.degree()), names)
    };
    key(a).cmp(&key(b))
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (index, term) in self.terms.iter().enumerate() {
            let coefficient = term.coefficient();
            let variables = term.variables();
            match (index, coefficient < 0) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            let magnitude = coefficient.unsigned_abs();
            if variables.is_empty() {
                write!(f, "{}", magnitude)?;
            } else if magnitude == 1 {
                write!(f, "{}", variables_to_string(variables))?;
            } else {
                write!(f, "{}*{}", magnitude, variables_to_string(variables))?;
            }
        }
        Ok(())
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.terms.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn constant(value: i64) -> Polynomial {
        Polynomial::new(Token::Constant(value)).unwrap()
    }

    fn variable(name: &str) -> Polynomial {
        Polynomial::new(Token::Variable(name.to_string())).unwrap()
    }

    #[test]
    fn leaf_polynomial_has_one_term() {
        let x = variable("x");

        assert_eq!(x.terms().len(), 1);
        assert_eq!(x.to_string(), "x");
    }

    #[test]
    fn like_terms_are_merged() {
        let x = variable("x");

        let sum = x.add(&x).unwrap();

        assert_eq!(sum.to_string(), "2*x");
    }

    #[test]
    fn cancelling_terms_are_dropped() {
        let x = variable("x");

        let difference = x.sub(&x).unwrap();

        assert!(difference.is_zero());
        assert_eq!(difference, Polynomial::zero());
        assert_eq!(difference.to_string(), "0");
    }

    #[test]
    fn subtraction_keeps_operand_order() {
        let difference = constant(1).sub(&constant(5)).unwrap();

        assert_eq!(difference.to_string(), "-4");
    }

    #[test]
    fn terms_are_ordered_by_degree_then_name() {
        let x = variable("x");
        let y = variable("y");
        let sum = constant(1)
            .add(&y)
            .unwrap()
            .add(&x.mul(&x).unwrap())
            .unwrap()
            .add(&x)
            .unwrap();

        assert_eq!(sum.to_string(), "x^2 + x + y + 1");
    }

    #[test]
    fn multiplication_distributes_over_terms() {
        let x_plus_one = variable("x").add(&constant(1)).unwrap();
        let x_minus_one = variable("x").sub(&constant(1)).unwrap();

        let product = x_plus_one.mul(&x_minus_one).unwrap();

        assert_eq!(product.to_string(), "x^2 - 1");
    }

    #[test]
    fn binomial_is_squared() {
        let x_plus_one = variable("x").add(&constant(1)).unwrap();

        let square = x_plus_one.pow(&constant(2)).unwrap();

        assert_eq!(square.to_string(), "x^2 + 2*x + 1");
    }

    #[test]
    fn single_term_is_powered_by_repetition() {
        let two_x = constant(2).mul(&variable("x")).unwrap();

        let cube = two_x.pow(&constant(3)).unwrap();

        assert_eq!(cube.to_string(), "8*x^3");
    }

    #[test]
    fn zero_polynomial_raised_to_a_power_is_zero() {
        let power = Polynomial::zero().pow(&constant(3)).unwrap();

        assert!(power.is_zero());
    }

    #[test]
    fn non_constant_exponent_is_invalid() {
        let error = variable("x").pow(&variable("y")).unwrap_err();

        assert!(matches!(error, ExpressionError::InvalidExponent { .. }));
    }

    #[test]
    fn zero_exponent_is_invalid() {
        let zero = constant(1).sub(&constant(1)).unwrap();

        let error = variable("x").pow(&zero).unwrap_err();

        match error {
            ExpressionError::InvalidExponent { exponent } => assert_eq!(exponent, "0"),
            other => panic!("expected an invalid exponent, got {:?}", other),
        }
    }

    #[test]
    fn unit_coefficient_is_dropped_from_variable_terms() {
        let product = variable("x").mul(&constant(1)).unwrap();

        assert_eq!(product.terms()[0].tokens(), [Token::Variable("x".into())]);
    }

    #[test]
    fn degree_is_the_highest_term_degree() {
        let x = variable("x");
        let polynomial = x.mul(&x).unwrap().add(&variable("y")).unwrap();

        assert_eq!(polynomial.degree(), 2);
        assert_eq!(Polynomial::zero().degree(), 0);
    }

    #[test]
    fn huge_exponent_of_a_sum_is_rejected_before_multiplying() {
        let x_plus_one = variable("x").add(&constant(1)).unwrap();

        let error = x_plus_one.pow(&constant(4_000_000_000)).unwrap_err();

        assert!(matches!(
            error,
            ExpressionError::TooLarge {
                measure: "degree",
                ..
            }
        ));
    }

    #[test]
    fn too_many_products_are_rejected_before_multiplying() {
        let many_variables = Polynomial {
            terms: (0..2048)
                .map(|index| Monomial::new(Token::Variable(format!("a{}", index))).unwrap())
                .collect(),
        };

        let error = many_variables.mul(&many_variables).unwrap_err();

        assert!(matches!(
            error,
            ExpressionError::TooLarge {
                measure: "number of factors",
                ..
            }
        ));
    }

    #[test]
    fn overflowing_sum_is_reported() {
        let error = constant(i64::MAX).add(&constant(1)).unwrap_err();

        assert!(matches!(error, ExpressionError::Overflow));
    }
}
