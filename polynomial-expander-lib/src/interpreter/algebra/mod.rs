//! Commutative algebra over integer coefficients and named variables.

pub mod monomial;
pub mod polynomial;

/// Highest degree any term may reach.
///
/// Expanded terms keep every variable factor, so the degree bounds the memory
/// a single term takes.
pub const MAX_DEGREE: usize = 1024;

/// Most factors a single polynomial multiplication may produce before like
/// terms are merged.
pub const MAX_FACTORS: usize = 1 << 22;
