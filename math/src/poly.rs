//! Sharing polynomials: Horner evaluation and Lagrange interpolation.

use crate::error::Result;
use crate::traits::Arithmetic;

/// A polynomial with coefficients in ascending order of degree.
///
/// Coefficient 0 is the constant term, which is where a secret lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<E> {
    coefficients: Vec<E>,
}

impl<E> From<Vec<E>> for Polynomial<E> {
    fn from(coefficients: Vec<E>) -> Self {
        Self { coefficients }
    }
}

impl<E: Clone> Polynomial<E> {
    #[inline]
    pub fn coefficients(&self) -> &[E] {
        &self.coefficients
    }

    /// Formal degree (number of coefficients minus one); `None` when empty.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn constant_term(&self) -> Option<&E> {
        self.coefficients.first()
    }

    /// Evaluate at `x` using Horner's method.
    pub fn evaluate<A>(&self, arith: &A, x: &E) -> E
    where
        A: Arithmetic<Element = E>,
    {
        self.coefficients
            .iter()
            .rev()
            .fold(arith.zero(), |acc, coeff| {
                arith.add(&arith.mul(&acc, x), coeff)
            })
    }
}

/// Evaluate at `x` the unique polynomial of degree `< points.len()` passing
/// through `points`.
///
/// O(k²) multiplications and one division per point. The x-coordinates must
/// be pairwise distinct in the domain, otherwise the division fails.
pub fn interpolate_at<A: Arithmetic>(
    arith: &A,
    points: &[(A::Element, A::Element)],
    x: &A::Element,
) -> Result<A::Element> {
    let mut value = arith.zero();

    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut numerator = arith.one();
        let mut denominator = arith.one();

        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = arith.mul(&numerator, &arith.sub(x, xj));
            denominator = arith.mul(&denominator, &arith.sub(xi, xj));
        }

        let basis = arith.divide(&numerator, &denominator)?;
        value = arith.add(&value, &arith.mul(yi, &basis));
    }

    Ok(value)
}

/// Lagrange interpolation at `x = 0`, i.e. recovery of the constant term.
pub fn interpolate_at_zero<A: Arithmetic>(
    arith: &A,
    points: &[(A::Element, A::Element)],
) -> Result<A::Element> {
    interpolate_at(arith, points, &arith.zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use crate::field::PrimeField;
    use crate::fraction::{Fraction, Rationals};
    use crate::integer::Integers;
    use crate::{big, big_vec, poly};
    use num_bigint::{BigInt, BigUint};

    fn int_poly(coeffs: &[i64]) -> Polynomial<BigInt> {
        let coeffs: Vec<BigInt> = coeffs.iter().map(|&c| c.into()).collect();
        Polynomial::from(coeffs)
    }

    mod evaluation {
        use super::*;

        #[test]
        fn horner_matches_naive_sum() {
            // 3 + 10x + 8x^2
            let poly = int_poly(&[3, 10, 8]);
            for x in -5i64..=5 {
                let expected = 3 + 10 * x + 8 * x * x;
                assert_eq!(
                    poly.evaluate(&Integers, &BigInt::from(x)),
                    BigInt::from(expected)
                );
            }
        }

        #[test]
        fn empty_polynomial_evaluates_to_zero() {
            let poly: Polynomial<BigInt> = poly![];
            assert_eq!(poly.degree(), None);
            assert_eq!(poly.constant_term(), None);
            assert_eq!(
                poly.evaluate(&Integers, &BigInt::from(7)),
                BigInt::from(0)
            );
        }

        #[test]
        fn evaluation_in_a_field_reduces() {
            let field = PrimeField::new(big!(1613)).unwrap();
            let poly = poly![big!(1234), big!(166), big!(94)];
            let ys: Vec<BigUint> = (1..=6u32)
                .map(|x| poly.evaluate(&field, &big!(x)))
                .collect();
            assert_eq!(ys, big_vec![1494, 329, 965, 176, 1188, 775]);
        }
    }

    mod interpolation {
        use super::*;

        #[test]
        fn line_through_three_points_in_the_field() {
            // y = x + 1
            let field = PrimeField::new(big!(8_380_417)).unwrap();
            let points: Vec<(BigUint, BigUint)> = [(1u32, 2u32), (2, 3), (3, 4)]
                .iter()
                .map(|&(x, y)| (BigUint::from(x), BigUint::from(y)))
                .collect();
            assert_eq!(
                interpolate_at_zero(&field, &points).unwrap(),
                big!(1)
            );
        }

        #[test]
        fn rational_interpolation_recovers_integer_constant() {
            let poly = int_poly(&[1234, 166, 94]);
            let points: Vec<(Fraction, Fraction)> = [2i64, 4, 5]
                .iter()
                .map(|&x| {
                    let y = poly.evaluate(&Integers, &BigInt::from(x));
                    (Fraction::from(x), Fraction::from(y))
                })
                .collect();
            let secret = interpolate_at_zero(&Rationals, &points).unwrap();
            assert_eq!(secret.to_integer().unwrap(), BigInt::from(1234));
        }

        #[test]
        fn interpolation_at_other_points() {
            let poly = int_poly(&[-7, 0, 2]);
            let points: Vec<(Fraction, Fraction)> = [1i64, 3, 8]
                .iter()
                .map(|&x| {
                    let y = poly.evaluate(&Integers, &BigInt::from(x));
                    (Fraction::from(x), Fraction::from(y))
                })
                .collect();
            let at = Fraction::from(10);
            let value = interpolate_at(&Rationals, &points, &at).unwrap();
            assert_eq!(value, Fraction::from(193));
        }

        #[test]
        fn repeated_x_fails_in_the_field() {
            let field = PrimeField::new(big!(101)).unwrap();
            let points = vec![
                (big!(3), big!(9)),
                (big!(3), big!(9)),
            ];
            assert!(matches!(
                interpolate_at_zero(&field, &points),
                Err(MathError::NonInvertible { .. })
            ));
        }

        #[test]
        fn repeated_x_fails_over_the_rationals() {
            let points = vec![
                (Fraction::from(3), Fraction::from(9)),
                (Fraction::from(3), Fraction::from(9)),
            ];
            assert_eq!(
                interpolate_at_zero(&Rationals, &points),
                Err(MathError::DivisionByZero)
            );
        }
    }
}
