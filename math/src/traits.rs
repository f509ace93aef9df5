use std::fmt::Debug;

use num_bigint::BigInt;

use crate::error::Result;

/// The operations a sharing polynomial needs from the domain it lives in.
///
/// Horner evaluation and Lagrange interpolation are written once against this
/// trait; the plain-integer and prime-field sharing modes only differ in the
/// implementation they pick.
pub trait Arithmetic {
    type Element: Clone + Debug + PartialEq;

    fn zero(&self) -> Self::Element;

    fn one(&self) -> Self::Element;

    /// Map an integer into the domain.
    fn embed(&self, value: &BigInt) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `a / b`, failing when `b` cannot divide `a` in this domain.
    fn divide(
        &self,
        a: &Self::Element,
        b: &Self::Element,
    ) -> Result<Self::Element>;

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        self.sub(&self.zero(), a)
    }
}
