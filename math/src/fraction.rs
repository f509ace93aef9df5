//! Exact rationals over big integers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{MathError, Result};
use crate::traits::Arithmetic;

/// A reduced fraction with a strictly positive denominator.
///
/// Integer-mode reconstruction divides by products of x-coordinate
/// differences; keeping numerator and denominator apart makes every
/// intermediate exact and leaves the integrality check for the very end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// The integer value, if the denominator divides the numerator.
    pub fn to_integer(&self) -> Result<BigInt> {
        if self.is_integer() {
            Ok(self.numerator.clone())
        } else {
            Err(MathError::InexactDivision {
                numerator: self.numerator.clone(),
                denominator: self.denominator.clone(),
            })
        }
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.numerator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    fn reduced(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        let gcd = numerator.gcd(&denominator);
        if !gcd.is_one() {
            numerator /= &gcd;
            denominator /= &gcd;
        }
        Self {
            numerator,
            denominator,
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, other: Self) -> Fraction {
        Fraction::reduced(
            &self.numerator * &other.denominator
                + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, other: Self) -> Fraction {
        Fraction::reduced(
            &self.numerator * &other.denominator
                - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, other: Self) -> Fraction {
        Fraction::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

/// The field of rationals, used for integer-mode reconstruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rationals;

impl Arithmetic for Rationals {
    type Element = Fraction;

    fn zero(&self) -> Fraction {
        Fraction::zero()
    }

    fn one(&self) -> Fraction {
        Fraction::one()
    }

    fn embed(&self, value: &BigInt) -> Fraction {
        Fraction::from_integer(value.clone())
    }

    fn add(&self, a: &Fraction, b: &Fraction) -> Fraction {
        a + b
    }

    fn sub(&self, a: &Fraction, b: &Fraction) -> Fraction {
        a - b
    }

    fn mul(&self, a: &Fraction, b: &Fraction) -> Fraction {
        a * b
    }

    fn divide(&self, a: &Fraction, b: &Fraction) -> Result<Fraction> {
        a.checked_div(b)
    }

    fn neg(&self, a: &Fraction) -> Fraction {
        -a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(BigInt::from(numerator), BigInt::from(denominator))
            .unwrap()
    }

    #[test]
    fn construction_reduces_and_normalises_sign() {
        let f = frac(6, -8);
        assert_eq!(f.numerator(), &BigInt::from(-3));
        assert_eq!(f.denominator(), &BigInt::from(4));
        assert_eq!(frac(0, -5), Fraction::zero());
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(
            Fraction::new(BigInt::one(), BigInt::zero()),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Fraction::one().checked_div(&Fraction::zero()),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn arithmetic_is_exact() {
        let a = frac(1, 3);
        let b = frac(1, 6);
        assert_eq!(&a + &b, frac(1, 2));
        assert_eq!(&a - &b, frac(1, 6));
        assert_eq!(&a * &b, frac(1, 18));
        assert_eq!(a.checked_div(&b).unwrap(), frac(2, 1));
        assert_eq!(-&a, frac(-1, 3));
    }

    #[test]
    fn to_integer_requires_unit_denominator() {
        assert_eq!(frac(12, 4).to_integer().unwrap(), BigInt::from(3));
        assert_eq!(
            frac(7, 2).to_integer(),
            Err(MathError::InexactDivision {
                numerator: BigInt::from(7),
                denominator: BigInt::from(2),
            })
        );
    }

    #[test]
    fn large_values_keep_full_precision() {
        // 2^200 + 1 would lose its low bit in an f64
        let big = (BigInt::one() << 200u32) + BigInt::one();
        let third = Fraction::new(big.clone(), BigInt::from(3)).unwrap();
        let back = &(&third + &third) + &third;
        assert_eq!(back.to_integer().unwrap(), big);
    }

    #[test]
    fn display_omits_unit_denominator() {
        assert_eq!(frac(4, 2).to_string(), "2");
        assert_eq!(frac(-3, 9).to_string(), "-1/3");
    }

    #[test]
    fn rationals_implement_arithmetic() {
        let q = Rationals;
        let x = q.embed(&BigInt::from(5));
        let y = q.embed(&BigInt::from(2));
        assert_eq!(q.divide(&x, &y).unwrap(), frac(5, 2));
        assert_eq!(q.neg(&x), frac(-5, 1));
        assert_eq!(q.sub(&q.add(&x, &y), &y), x);
    }
}
