//! Solving a single case: decoding the shares of a `CaseRecord` and recovering the secret from the first `k` of them.
//! All logging of the recovery happens here, `recovery_maths` stays silent.

use std::path::PathBuf;

use num::{BigInt, BigRational, BigUint};
use thiserror::Error;
use tracing::{debug, info};

use recovery_maths::lagrange::{self, Point, ReconstructionError};
use recovery_maths::numeral::{self, NumeralError};

use crate::sharing::lagrange_reconstruction::LagrangeReconstruction;
use crate::sharing::ThresholdReconstructionScheme;

pub use record::{Base, CaseRecord, Keys, ShareEntry};

mod record;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("could not read case file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed case record")]
    Json(#[from] serde_json::Error),

    #[error("entry of share {x} is malformed")]
    MalformedShare {
        x: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("threshold k = {k} is not between 1 and n = {n}")]
    InvalidThreshold { n: usize, k: usize },

    #[error("share {x} has base {base}, which is not an integer")]
    InvalidBase { x: usize, base: Base },

    #[error("value of share {x} could not be decoded")]
    Numeral {
        x: usize,
        #[source]
        source: NumeralError,
    },

    #[error("{required} shares are required, but the record only contains {available}")]
    InsufficientShares { required: usize, available: usize },

    #[error(transparent)]
    Reconstruction(#[from] ReconstructionError),
}

/// A share after decoding its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedShare {
    pub x: usize,
    pub base: u32,
    pub numeral: String,
    pub value: BigUint,
}

/// Everything the recovery of one case produced: all decoded shares, the points the secret was interpolated from,
/// what each of those points contributed to the constant term, and the secret itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub keys: Keys,
    pub shares: Vec<DecodedShare>,
    pub selected: Vec<Point>,
    pub contributions: Vec<BigRational>,
    pub secret: BigInt,
}

fn decode_share(x: usize, entry: ShareEntry) -> Result<DecodedShare, CaseError> {
    let base = entry.base.radix().ok_or_else(|| CaseError::InvalidBase {
        x,
        base: entry.base.clone(),
    })?;
    let value =
        numeral::convert(&entry.value, base).map_err(|source| CaseError::Numeral { x, source })?;

    debug!(x, base, numeral = %entry.value, value = %value, "decoded share");
    Ok(DecodedShare {
        x,
        base,
        numeral: entry.value,
        value,
    })
}

/// Recovers the secret of `record`. The shares `1..=n` present in the record are decoded in increasing order of their
/// index, and the first `k` of them are interpolated. Entries with an index beyond `n` are ignored. Every present share
/// is decoded, so a malformed share fails the case even if it is not among the first `k`.
pub fn solve(record: &CaseRecord) -> Result<Solution, CaseError> {
    let keys = record.keys;
    if keys.k == 0 || keys.k > keys.n {
        return Err(CaseError::InvalidThreshold {
            n: keys.n,
            k: keys.k,
        });
    }
    info!(n = keys.n, k = keys.k, "solving case");

    let shares = record
        .share_indices()
        .into_iter()
        .filter_map(|x| record.share(x).map(|entry| entry.and_then(|entry| decode_share(x, entry))))
        .collect::<Result<Vec<_>, _>>()?;
    if shares.len() < keys.k {
        return Err(CaseError::InsufficientShares {
            required: keys.k,
            available: shares.len(),
        });
    }

    let points = shares
        .iter()
        .map(|share| Point::new(share.x, share.value.clone()))
        .collect::<Vec<_>>();
    let secret = LagrangeReconstruction::reconstruct_secret(&points, keys.k)?;

    let selected = points.into_iter().take(keys.k).collect::<Vec<_>>();
    let contributions = lagrange::contributions(&selected)?;
    for (point, contribution) in selected.iter().zip(&contributions) {
        debug!(x = point.x, y = %point.y, contribution = %contribution, "interpolated point");
    }
    info!(secret = %secret, "recovered secret");

    Ok(Solution {
        keys,
        shares,
        selected,
        contributions,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use num::bigint::Sign;
    use num::{BigInt, BigUint};
    use rand::{thread_rng, Rng};
    use serde_json::{json, Map, Value};

    use recovery_maths::lagrange::{self, ReconstructionError};
    use recovery_maths::numeral::{self, NumeralError};

    use super::*;

    #[test]
    fn test_selects_first_shares() {
        let record = CaseRecord::from_json(
            r#"{
                "keys": { "n": 5, "k": 3 },
                "5": { "base": "10", "value": "28" },
                "1": { "base": "2", "value": "100" },
                "3": { "base": "10", "value": "12" },
                "4": { "base": "16", "value": "13" }
            }"#,
        )
        .unwrap();

        let solution = solve(&record).unwrap();
        assert_eq!(
            solution.shares.iter().map(|share| share.x).collect::<Vec<_>>(),
            vec![1, 3, 4, 5]
        );
        assert_eq!(
            solution.selected.iter().map(|point| point.x).collect::<Vec<_>>(),
            vec![1, 3, 4]
        );
        assert_eq!(solution.shares[2].value, BigUint::from(19u32));
        // f(x) = 3 + x^2
        assert_eq!(solution.secret, BigInt::from(3));
        assert_eq!(
            solution.contributions,
            [8, -24, 19]
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_numeric_share_order() {
        // f(x) = 3 + x
        let record = CaseRecord::from_json(
            r#"{
                "keys": { "n": 10, "k": 2 },
                "10": { "base": "10", "value": "13" },
                "2": { "base": "10", "value": "5" },
                "9": { "base": "10", "value": "12" }
            }"#,
        )
        .unwrap();

        let solution = solve(&record).unwrap();
        assert_eq!(
            solution.selected.iter().map(|point| point.x).collect::<Vec<_>>(),
            vec![2, 9]
        );
        assert_eq!(solution.secret, BigInt::from(3));
    }

    #[test]
    fn test_huge_share_count() {
        let record = CaseRecord::from_json(&format!(
            r#"{{ "keys": {{ "n": {}, "k": 1 }}, "1": {{ "base": "10", "value": "7" }} }}"#,
            usize::MAX
        ))
        .unwrap();

        let solution = solve(&record).unwrap();
        assert_eq!(solution.shares.len(), 1);
        assert_eq!(solution.secret, BigInt::from(7));
    }

    #[test]
    fn test_invalid_share_past_threshold() {
        let record = CaseRecord::from_json(
            r#"{
                "keys": { "n": 3, "k": 1 },
                "1": { "base": "10", "value": "7" },
                "3": { "base": "2", "value": "7" }
            }"#,
        )
        .unwrap();
        assert!(matches!(
            solve(&record),
            Err(CaseError::Numeral { x: 3, .. })
        ));
    }

    #[test]
    fn test_numeric_base() {
        let record = CaseRecord::from_json(
            r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": 2, "value": "111" } }"#,
        )
        .unwrap();
        let solution = solve(&record).unwrap();
        assert_eq!(solution.shares[0].base, 2);
        assert_eq!(solution.secret, BigInt::from(7));
    }

    #[test]
    fn test_invalid_threshold() {
        for keys in &[r#"{ "n": 3, "k": 0 }"#, r#"{ "n": 3, "k": 4 }"#] {
            let record = CaseRecord::from_json(&format!(r#"{{ "keys": {} }}"#, keys)).unwrap();
            assert!(matches!(
                solve(&record),
                Err(CaseError::InvalidThreshold { n: 3, .. })
            ));
        }
    }

    #[test]
    fn test_insufficient_shares() {
        let record = CaseRecord::from_json(
            r#"{
                "keys": { "n": 4, "k": 3 },
                "1": { "base": "10", "value": "4" },
                "2": { "base": "2", "value": "111" },
                "6": { "base": "4", "value": "213" }
            }"#,
        )
        .unwrap();
        assert!(matches!(
            solve(&record),
            Err(CaseError::InsufficientShares {
                required: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_invalid_base() {
        let record = CaseRecord::from_json(
            r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "ten", "value": "4" } }"#,
        )
        .unwrap();
        assert!(matches!(
            solve(&record),
            Err(CaseError::InvalidBase { x: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_digit() {
        let record = CaseRecord::from_json(
            r#"{ "keys": { "n": 2, "k": 2 }, "1": { "base": "10", "value": "4" }, "2": { "base": "2", "value": "121" } }"#,
        )
        .unwrap();
        match solve(&record) {
            Err(CaseError::Numeral { x, source }) => {
                assert_eq!(x, 2);
                assert_eq!(
                    source,
                    NumeralError::InvalidDigit {
                        digit: '2',
                        position: 1,
                        base: 2
                    }
                );
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_secret() {
        let record = CaseRecord::from_json(
            r#"{ "keys": { "n": 3, "k": 2 }, "1": { "base": "10", "value": "5" }, "3": { "base": "10", "value": "6" } }"#,
        )
        .unwrap();
        assert!(matches!(
            solve(&record),
            Err(CaseError::Reconstruction(
                ReconstructionError::NonIntegerSecret { .. }
            ))
        ));
    }

    #[test]
    fn test_random_polynomial_record() {
        let mut rng = thread_rng();
        let threshold: usize = rng.gen_range(1, 8);
        let count = threshold + rng.gen_range(0, 4);
        let coefficients = (0..threshold)
            .map(|_| BigUint::from(rng.gen::<u64>()))
            .collect::<Vec<_>>();

        let mut record = Map::new();
        record.insert("keys".to_owned(), json!({ "n": count, "k": threshold }));
        for x in 1..=count {
            let base: u32 = rng.gen_range(2, 37);
            let value = numeral::format(&lagrange::evaluate(&coefficients, x), base).unwrap();
            record.insert(
                x.to_string(),
                json!({ "base": base.to_string(), "value": value }),
            );
        }

        let record: CaseRecord = serde_json::from_value(Value::Object(record)).unwrap();
        let solution = solve(&record).unwrap();
        assert_eq!(solution.selected.len(), threshold);
        assert_eq!(
            solution.secret,
            BigInt::from_biguint(Sign::Plus, coefficients[0].clone())
        );
    }
}
