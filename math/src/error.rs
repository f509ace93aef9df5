use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("modulus must be at least 2, got {0}")]
    InvalidModulus(BigUint),
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NonInvertible { value: BigUint, modulus: BigUint },
    #[error("division by zero")]
    DivisionByZero,
    #[error("{numerator} is not divisible by {denominator}")]
    InexactDivision {
        numerator: BigInt,
        denominator: BigInt,
    },
    #[error("cannot sample from an empty range")]
    EmptyRange,
}

pub type Error = MathError;
