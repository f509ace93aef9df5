pub use crate::{big, big_vec, poly};
pub use crate::{
    field::PrimeField,
    fraction::{Fraction, Rationals},
    integer::Integers,
    poly::{interpolate_at, interpolate_at_zero, Polynomial},
    random::{RandomSource, SystemRandom},
    traits::Arithmetic,
};
pub use num_bigint::{BigInt, BigUint};
