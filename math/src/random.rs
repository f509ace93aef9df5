//! Uniform sampling of big integers.

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use crate::error::{MathError, Result};

/// Production entropy source: the operating system's CSPRNG.
pub use rand::rngs::OsRng as SystemRandom;

/// A source of uniformly distributed big integers.
///
/// Every split call takes one of these explicitly. Any cryptographically
/// secure `rand` generator qualifies, so tests can pass a seeded
/// `ChaCha20Rng` and get reproducible shares.
pub trait RandomSource {
    /// A uniform value in `[0, bound)`.
    fn next_below(&mut self, bound: &BigUint) -> Result<BigUint>;

    /// A uniform value in `[low, high)`.
    fn next_in_range(
        &mut self,
        low: &BigUint,
        high: &BigUint,
    ) -> Result<BigUint> {
        if high <= low {
            return Err(MathError::EmptyRange);
        }
        Ok(low + self.next_below(&(high - low))?)
    }
}

impl<R> RandomSource for R
where
    R: RngCore + CryptoRng + ?Sized,
{
    fn next_below(&mut self, bound: &BigUint) -> Result<BigUint> {
        if bound.is_zero() {
            return Err(MathError::EmptyRange);
        }
        Ok(self.gen_biguint_below(bound))
    }
}
