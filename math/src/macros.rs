//! Shared macros for constructing core math primitives.

/// Build a [`BigUint`](num_bigint::BigUint).
///
/// Integer literals are read as `u64`; any other expression goes through
/// `BigUint::from`.
///
/// ```
/// use math::prelude::*;
///
/// let a = big!(42);
/// assert_eq!(a, BigUint::from(42u8));
///
/// let x: u32 = 7;
/// assert_eq!(big!(x), BigUint::from(7u8));
/// ```
#[macro_export]
macro_rules! big {
    ($value:literal) => {{
        let value: u64 = $value;
        $crate::num_bigint::BigUint::from(value)
    }};
    ($value:expr) => {
        $crate::num_bigint::BigUint::from($value)
    };
}

/// Create a [`Vec`] of [`BigUint`](num_bigint::BigUint)s from integer
/// literals.
///
/// ```
/// use math::prelude::*;
///
/// assert_eq!(big_vec![1, 2], vec![big!(1), big!(2)]);
/// ```
#[macro_export]
macro_rules! big_vec {
    ($($value:literal),* $(,)?) => {
        vec![$($crate::big!($value)),*]
    };
}

/// Construct a [`Polynomial`](crate::poly::Polynomial) from coefficients.
///
/// ```
/// use math::prelude::*;
///
/// let poly: Polynomial<BigUint> = poly![big!(1), big!(2), big!(3)];
/// assert_eq!(poly.degree(), Some(2));
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::poly::Polynomial::from(::std::vec::Vec::new())
    }};
    ($val:expr; $count:expr) => {{
        let value = $val;
        let count = $count;
        $crate::poly::Polynomial::from(vec![value; count])
    }};
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::from(vec![$($coeff),+])
    }};
}
