pub mod lagrange_reconstruction;

/// A threshold secret sharing scheme whose secret can be recovered from any `threshold` of its `n` shares. The secret
/// is of type `T` and shares are of type `S`. Share generation is not part of this trait, shares are taken as they
/// were handed out.
pub trait ThresholdReconstructionScheme<T, S> {
    /// Reasons why a set of shares does not determine a secret.
    type Error;

    /// Take a slice of shares and reconstruct the secret from them. Only the first `threshold` shares are used.
    /// # Parameters
    /// - `shares` a collection of at least `threshold` shares
    /// - `threshold` the threshold the shares were generated upon. This may be less than the actual number of shares
    /// given, but it must be the same value as during generation
    ///
    /// # Returns
    /// Given that `threshold` matches the threshold at generation, the secret the shares were generated from.
    fn reconstruct_secret(shares: &[S], threshold: usize) -> Result<T, Self::Error>;
}
