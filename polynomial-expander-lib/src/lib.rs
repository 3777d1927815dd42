//! Expands algebraic expressions over integers and named variables into
//! canonical polynomials.
//!
//! Text is split into tokens, reordered into postfix notation and evaluated on
//! a stack of polynomials, see [`interpreter::expand`].

pub mod interpreter;
