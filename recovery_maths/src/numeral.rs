//! Positional numerals in bases 2 to 36, using the digits `0-9` followed by the letters `a-z`. Letters are accepted in
//! either case.

use num::{BigUint, Zero};
use thiserror::Error;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base, one digit per character of `0-9a-z`.
pub const MAX_BASE: u32 = 36;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("base {0} is outside of the supported range {}..={}", MIN_BASE, MAX_BASE)]
    UnsupportedBase(u32),

    #[error("numeral is empty")]
    EmptyNumeral,

    #[error("digit {digit:?} at position {position} is not valid in base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
}

fn check_base(base: u32) -> Result<(), NumeralError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(NumeralError::UnsupportedBase(base))
    }
}

/// Decode `numeral` in the given `base` into its exact value using Horner's method, reading digits from the most
/// significant one.
/// # Parameters
/// - `numeral` a non-empty string of digits
/// - `base` the base of the numeral, between `MIN_BASE` and `MAX_BASE`
///
/// # Returns
/// The value of the numeral, or `InvalidDigit` for the first character that is not a digit of `base`.
pub fn convert(numeral: &str, base: u32) -> Result<BigUint, NumeralError> {
    check_base(base)?;
    if numeral.is_empty() {
        return Err(NumeralError::EmptyNumeral);
    }

    let radix = BigUint::from(base);
    numeral
        .chars()
        .enumerate()
        .try_fold(BigUint::zero(), |acc, (position, digit)| {
            match digit.to_digit(MAX_BASE) {
                Some(value) if value < base => Ok(acc * &radix + BigUint::from(value)),
                _ => Err(NumeralError::InvalidDigit {
                    digit,
                    position,
                    base,
                }),
            }
        })
}

/// Write `value` as a numeral in `base` with lowercase digits and without leading zeros. This is the inverse of
/// `convert`.
pub fn format(value: &BigUint, base: u32) -> Result<String, NumeralError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
