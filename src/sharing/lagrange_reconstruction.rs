use num::BigInt;
use recovery_maths::lagrange::{self, Point, ReconstructionError};

use crate::sharing::ThresholdReconstructionScheme;

/// Shamir's secret sharing interpreted over the rationals. The secret is the constant term of the polynomial of
/// degree `threshold - 1` that passes through the shares.
pub struct LagrangeReconstruction;

impl ThresholdReconstructionScheme<BigInt, Point> for LagrangeReconstruction {
    type Error = ReconstructionError;

    /// Interpolates the secret using the Lagrange interpolation method.
    /// # Parameters
    /// - `shares` a collection of at least `threshold` shares with distinct share indices
    /// - `threshold` the number of shares that determine the polynomial
    ///
    /// # Returns
    /// The constant term of the interpolated polynomial, or the reason it could not be determined
    fn reconstruct_secret(shares: &[Point], threshold: usize) -> Result<BigInt, ReconstructionError> {
        let used = &shares[..threshold.min(shares.len())];
        lagrange::reconstruct(used)
    }
}
