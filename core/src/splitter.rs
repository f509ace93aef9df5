use math::prelude::*;
use math::prime::random_prime_above;
use num_traits::Zero;

use crate::domain::{default_coefficient_bound, Domain};
use crate::error::{ParameterError, ShamirResult};
use crate::params::{validate_threshold_config, SharingConfig};
use crate::share::Share;

/// Splits secrets into `share_count` shares, any `threshold` of which
/// reconstruct it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretSplitter {
    threshold: usize,
    share_count: usize,
}

impl SecretSplitter {
    /// Create a splitter for the provided threshold/share-count configuration.
    pub fn new(threshold: usize, share_count: usize) -> ShamirResult<Self> {
        validate_threshold_config(threshold, share_count)?;
        Ok(Self {
            threshold,
            share_count,
        })
    }

    pub fn from_config(config: SharingConfig) -> Self {
        Self {
            threshold: config.threshold(),
            share_count: config.share_count(),
        }
    }

    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    pub fn share_count(&self) -> usize {
        self.share_count
    }

    /// Split `secret` in the given domain.
    pub fn split<R>(
        &self,
        domain: &Domain,
        secret: &BigUint,
        rng: &mut R,
    ) -> ShamirResult<Vec<Share>>
    where
        R: RandomSource + ?Sized,
    {
        match domain {
            Domain::Integer { coefficient_bound } => {
                self.split_integer(secret, coefficient_bound, rng)
            }
            Domain::Field { modulus } => self.split_field(secret, modulus, rng),
        }
    }

    /// Integer-mode split: coefficients in `[0, coefficient_bound)`, shares
    /// are plain polynomial values at `x = 1..=N`.
    pub fn split_integer<R>(
        &self,
        secret: &BigUint,
        coefficient_bound: &BigUint,
        rng: &mut R,
    ) -> ShamirResult<Vec<Share>>
    where
        R: RandomSource + ?Sized,
    {
        if coefficient_bound.is_zero() {
            return Err(ParameterError::ZeroCoefficientBound.into());
        }

        let poly = self.sharing_polynomial(secret, coefficient_bound, rng)?;
        let poly = Polynomial::from(
            poly.coefficients()
                .iter()
                .cloned()
                .map(BigInt::from)
                .collect::<Vec<_>>(),
        );

        self.points()
            .map(|x| {
                // every coefficient and x are non-negative
                let (_, y) =
                    poly.evaluate(&Integers, &BigInt::from(x)).into_parts();
                Share::new(x, y)
            })
            .collect()
    }

    /// Field-mode split over `GF(modulus)`.
    ///
    /// The modulus must exceed both the secret and the share count. It is
    /// expected to be prime but this is not checked; see
    /// [`Domain::is_prime_field`].
    pub fn split_field<R>(
        &self,
        secret: &BigUint,
        modulus: &BigUint,
        rng: &mut R,
    ) -> ShamirResult<Vec<Share>>
    where
        R: RandomSource + ?Sized,
    {
        let field = PrimeField::new(modulus.clone())?;
        if secret >= modulus {
            return Err(ParameterError::SecretOutOfRange {
                modulus: modulus.clone(),
            }
            .into());
        }
        if &BigUint::from(self.share_count) >= modulus {
            return Err(ParameterError::ShareCountExceedsModulus {
                share_count: self.share_count,
                modulus: modulus.clone(),
            }
            .into());
        }

        let poly = self.sharing_polynomial(secret, modulus, rng)?;
        self.points()
            .map(|x| Share::new(x, poly.evaluate(&field, &big!(x))))
            .collect()
    }

    /// Random polynomial of degree `threshold - 1` with the constant term set
    /// to `secret` and the remaining coefficients drawn from `[0, bound)`.
    pub fn sharing_polynomial<R>(
        &self,
        secret: &BigUint,
        bound: &BigUint,
        rng: &mut R,
    ) -> ShamirResult<Polynomial<BigUint>>
    where
        R: RandomSource + ?Sized,
    {
        let mut coefficients = Vec::with_capacity(self.threshold);
        coefficients.push(secret.clone());
        for _ in 1..self.threshold {
            coefficients.push(rng.next_below(bound)?);
        }
        Ok(Polynomial::from(coefficients))
    }

    fn points(&self) -> impl Iterator<Item = u64> {
        1..=self.share_count as u64
    }
}

/// Integer-mode split of `secret` with the default coefficient bound.
pub fn split<R>(
    secret: &BigUint,
    threshold: usize,
    share_count: usize,
    rng: &mut R,
) -> ShamirResult<Vec<Share>>
where
    R: RandomSource + ?Sized,
{
    SecretSplitter::new(threshold, share_count)?.split_integer(
        secret,
        &default_coefficient_bound(secret),
        rng,
    )
}

/// Field-mode split of `secret` modulo `modulus`.
pub fn split_finite_field<R>(
    secret: &BigUint,
    threshold: usize,
    share_count: usize,
    modulus: &BigUint,
    rng: &mut R,
) -> ShamirResult<Vec<Share>>
where
    R: RandomSource + ?Sized,
{
    SecretSplitter::new(threshold, share_count)?
        .split_field(secret, modulus, rng)
}

/// Field-mode split with a freshly derived prime modulus, returned alongside
/// the shares since reconstruction needs it.
pub fn split_finite_field_derived<R>(
    secret: &BigUint,
    threshold: usize,
    share_count: usize,
    rng: &mut R,
) -> ShamirResult<(BigUint, Vec<Share>)>
where
    R: RandomSource + ?Sized,
{
    let splitter = SecretSplitter::new(threshold, share_count)?;
    let modulus = derive_modulus(secret, share_count, rng)?;
    let shares = splitter.split_field(secret, &modulus, rng)?;
    Ok((modulus, shares))
}

/// A random probable prime strictly above both `secret_bound` and
/// `share_count`.
pub fn derive_modulus<R>(
    secret_bound: &BigUint,
    share_count: usize,
    rng: &mut R,
) -> ShamirResult<BigUint>
where
    R: RandomSource + ?Sized,
{
    let floor = secret_bound.max(&BigUint::from(share_count)).clone();
    Ok(random_prime_above(&floor, rng)?)
}
