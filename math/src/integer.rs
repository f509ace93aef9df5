use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{MathError, Result};
use crate::traits::Arithmetic;

/// Plain arbitrary-precision integers; division must be exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Integers;

impl Arithmetic for Integers {
    type Element = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn embed(&self, value: &BigInt) -> BigInt {
        value.clone()
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a - b
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn divide(&self, a: &BigInt, b: &BigInt) -> Result<BigInt> {
        if b.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let (quotient, remainder) = a.div_rem(b);
        if !remainder.is_zero() {
            return Err(MathError::InexactDivision {
                numerator: a.clone(),
                denominator: b.clone(),
            });
        }
        Ok(quotient)
    }

    fn neg(&self, a: &BigInt) -> BigInt {
        -a
    }
}
