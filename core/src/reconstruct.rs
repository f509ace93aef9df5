use std::collections::HashSet;

use math::prelude::*;
use num_bigint::Sign;
use num_traits::Zero;

use crate::domain::Domain;
use crate::error::{ParameterError, ShamirError, ShamirResult};
use crate::share::Share;

/// Recovers a secret from `threshold` shares by Lagrange interpolation at
/// `x = 0`.
///
/// Shares from fewer than the true threshold still interpolate to *some*
/// value. Nothing in the shares reveals the threshold they were made with,
/// so supplying enough genuine shares is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconstructor {
    threshold: usize,
}

impl Reconstructor {
    pub fn new(threshold: usize) -> ShamirResult<Self> {
        if threshold == 0 {
            return Err(ParameterError::ZeroThreshold.into());
        }
        Ok(Self { threshold })
    }

    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Reconstruct from the first `threshold` of `shares`.
    pub fn reconstruct(
        &self,
        domain: &Domain,
        shares: &[Share],
    ) -> ShamirResult<BigUint> {
        match domain {
            Domain::Integer { .. } => self.reconstruct_integer(shares),
            Domain::Field { modulus } => {
                self.reconstruct_field(shares, modulus)
            }
        }
    }

    /// Exact interpolation over the rationals. The result must come out as a
    /// non-negative integer.
    pub fn reconstruct_integer(
        &self,
        shares: &[Share],
    ) -> ShamirResult<BigUint> {
        let active = self.select_active_shares(shares)?;
        let points: Vec<(Fraction, Fraction)> = active
            .iter()
            .map(|share| {
                (
                    Fraction::from(BigInt::from(share.x)),
                    Fraction::from(BigInt::from(share.y.clone())),
                )
            })
            .collect();

        let secret =
            interpolate_at_zero(&Rationals, &points)?.to_integer()?;
        match secret.into_parts() {
            (Sign::Minus, _) => Err(ShamirError::InexactReconstruction),
            (_, magnitude) => Ok(magnitude),
        }
    }

    /// Interpolation modulo `modulus`; x and y values are reduced first.
    ///
    /// An x that is a multiple of `modulus` counts as a zero coordinate, and
    /// two x values congruent modulo `modulus` count as duplicates.
    pub fn reconstruct_field(
        &self,
        shares: &[Share],
        modulus: &BigUint,
    ) -> ShamirResult<BigUint> {
        let field = PrimeField::new(modulus.clone())?;
        let active = self.select_active_shares(shares)?;
        let xs = reduce_coordinates(&field, shares)?;
        let points: Vec<(BigUint, BigUint)> = active
            .iter()
            .zip(xs)
            .map(|(share, x)| (x, field.reduce(&share.y)))
            .collect();

        Ok(interpolate_at_zero(&field, &points)?)
    }

    /// Check count and coordinates of `shares`, then take the first
    /// `threshold` of them.
    pub fn select_active_shares<'a>(
        &self,
        shares: &'a [Share],
    ) -> ShamirResult<&'a [Share]> {
        if shares.len() < self.threshold {
            return Err(ShamirError::InsufficientShares {
                required: self.threshold,
                provided: shares.len(),
            });
        }
        ensure_distinct_coordinates(shares.iter().map(|share| share.x))?;
        Ok(&shares[..self.threshold])
    }
}

/// Reject a zero or repeated x-coordinate.
pub(crate) fn ensure_distinct_coordinates<I>(xs: I) -> ShamirResult<()>
where
    I: IntoIterator<Item = u64>,
{
    let mut seen = HashSet::new();
    for x in xs {
        if x == 0 {
            return Err(ParameterError::ZeroCoordinate.into());
        }
        if !seen.insert(x) {
            return Err(ShamirError::DuplicateCoordinate(x));
        }
    }
    Ok(())
}

/// Every x-coordinate of `shares` as a field element, in order.
fn reduce_coordinates(
    field: &PrimeField,
    shares: &[Share],
) -> ShamirResult<Vec<BigUint>> {
    let mut seen = HashSet::with_capacity(shares.len());
    shares
        .iter()
        .map(|share| -> ShamirResult<BigUint> {
            let x = field.reduce(&big!(share.x));
            if x.is_zero() {
                return Err(ParameterError::ZeroCoordinate.into());
            }
            if !seen.insert(x.clone()) {
                return Err(ShamirError::DuplicateCoordinate(share.x));
            }
            Ok(x)
        })
        .collect()
}

/// Reconstruct from every supplied share: integer mode when `modulus` is
/// `None`, field mode otherwise.
///
/// All shares take part in the interpolation, so extra genuine shares beyond
/// the threshold are harmless.
pub fn reconstruct(
    shares: &[Share],
    modulus: Option<&BigUint>,
) -> ShamirResult<BigUint> {
    reconstruct_with_threshold(shares, shares.len().max(1), modulus)
}

/// Reconstruct from the first `threshold` shares.
pub fn reconstruct_with_threshold(
    shares: &[Share],
    threshold: usize,
    modulus: Option<&BigUint>,
) -> ShamirResult<BigUint> {
    let reconstructor = Reconstructor::new(threshold)?;
    match modulus {
        None => reconstructor.reconstruct_integer(shares),
        Some(modulus) => reconstructor.reconstruct_field(shares, modulus),
    }
}
