//! Lagrange interpolation of a polynomial's constant term over the rationals. Given `k` points with distinct
//! abscissas, the unique polynomial of degree `k - 1` through them is evaluated at `x = 0` without forming its
//! coefficients.

use std::collections::HashSet;

use num::bigint::Sign;
use num::{BigInt, BigRational, BigUint, One, Zero};
use thiserror::Error;

/// A share of the secret: the sharing polynomial evaluated at the share index `x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: BigUint,
}

impl Point {
    pub fn new(x: usize, y: BigUint) -> Self {
        Point { x, y }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconstructionError {
    #[error("cannot interpolate an empty set of points")]
    EmptyPointSet,

    #[error("more than one point has the abscissa x = {0}")]
    DuplicateAbscissa(usize),

    #[error("the constant term {numerator}/{denominator} is not an integer")]
    NonIntegerSecret {
        numerator: BigInt,
        denominator: BigInt,
    },
}

fn abscissa(x: usize) -> BigInt {
    BigInt::from(x as u64)
}

fn ordinate(y: &BigUint) -> BigRational {
    BigRational::from_integer(BigInt::from_biguint(Sign::Plus, y.clone()))
}

fn check_points(points: &[Point]) -> Result<(), ReconstructionError> {
    if points.is_empty() {
        return Err(ReconstructionError::EmptyPointSet);
    }

    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.x) {
            return Err(ReconstructionError::DuplicateAbscissa(point.x));
        }
    }
    Ok(())
}

/// The Lagrange basis polynomial of point `i` evaluated at zero: `Π_{j≠i} (0 - x_j) / (x_i - x_j)`. The abscissas
/// must be distinct.
fn basis_at_zero(points: &[Point], i: usize) -> BigRational {
    let x_i = abscissa(points[i].x);
    points
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(BigRational::one(), |acc, (_, point)| {
            let x_j = abscissa(point.x);
            let denominator = &x_i - &x_j;
            acc * BigRational::new(-x_j, denominator)
        })
}

/// Computes the summand `y_i * L_i(0)` each point contributes to the constant term, in the order of `points`.
pub fn contributions(points: &[Point]) -> Result<Vec<BigRational>, ReconstructionError> {
    check_points(points)?;

    Ok(points
        .iter()
        .enumerate()
        .map(|(i, point)| ordinate(&point.y) * basis_at_zero(points, i))
        .collect())
}

/// Interpolates the constant term of the polynomial through `points` using exact rational arithmetic.
/// # Parameters
/// - `points` the points to interpolate, all with distinct abscissas. Their order does not matter.
///
/// # Returns
/// The constant term if it is an integer. Points that do not lie on a polynomial with integer constant term yield
/// `NonIntegerSecret` instead of a rounded value.
pub fn reconstruct(points: &[Point]) -> Result<BigInt, ReconstructionError> {
    let secret = contributions(points)?
        .into_iter()
        .fold(BigRational::zero(), |acc, summand| acc + summand);

    if secret.is_integer() {
        Ok(secret.to_integer())
    } else {
        Err(ReconstructionError::NonIntegerSecret {
            numerator: secret.numer().clone(),
            denominator: secret.denom().clone(),
        })
    }
}

/// Evaluate the polynomial `coefficients[0] + coefficients[1] * x + ...` at `x`.
pub fn evaluate(coefficients: &[BigUint], x: usize) -> BigUint {
    let x = BigUint::from(x as u64);
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, coefficient| acc * &x + coefficient)
}
