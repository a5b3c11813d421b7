//! Exact arithmetic for recovering the secret of a threshold sharing. `numeral` decodes share values written in
//! arbitrary bases and `lagrange` interpolates the constant term of the sharing polynomial over the rationals.
//! Nothing in this crate performs I/O.

pub mod lagrange;
pub mod numeral;
