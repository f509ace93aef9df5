//! Arithmetic modulo a fixed modulus `P`.

use std::mem;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::traits::Arithmetic;

/// Residues modulo `P`, normalised into `[0, P)`.
///
/// `P` is meant to be prime. Nothing here assumes it: [`PrimeField::inverse`]
/// reports values sharing a factor with the modulus instead of returning a
/// wrong answer, which is how an unsuitable modulus surfaces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u8) {
            return Err(MathError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Canonical representative of a signed integer.
    pub fn reduce_signed(&self, value: &BigInt) -> BigUint {
        let modulus = BigInt::from(self.modulus.clone());
        // mod_floor with a positive modulus is never negative
        value.mod_floor(&modulus).magnitude().clone()
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = self.reduce(b);
        (a + &self.modulus - b) % &self.modulus
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    pub fn inverse(&self, value: &BigUint) -> Result<BigUint> {
        let value = self.reduce(value);
        let (gcd, s, _) = extended_gcd(
            &BigInt::from(value.clone()),
            &BigInt::from(self.modulus.clone()),
        );
        if !gcd.is_one() {
            return Err(MathError::NonInvertible {
                value,
                modulus: self.modulus.clone(),
            });
        }
        Ok(self.reduce_signed(&s))
    }
}

impl Arithmetic for PrimeField {
    type Element = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        self.reduce(&BigUint::one())
    }

    fn embed(&self, value: &BigInt) -> BigUint {
        self.reduce_signed(value)
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        PrimeField::add(self, a, b)
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        PrimeField::sub(self, a, b)
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        PrimeField::mul(self, a, b)
    }

    fn divide(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        Ok(PrimeField::mul(self, a, &self.inverse(b)?))
    }

    fn neg(&self, a: &BigUint) -> BigUint {
        PrimeField::neg(self, a)
    }
}

/// Returns `(g, s, t)` with `a·s + b·t = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        old_r -= &quotient * &r;
        old_s -= &quotient * &s;
        old_t -= &quotient * &t;
        mem::swap(&mut old_r, &mut r);
        mem::swap(&mut old_s, &mut s);
        mem::swap(&mut old_t, &mut t);
    }

    (old_r, old_s, old_t)
}
