use math::error::MathError;
use num_bigint::BigUint;
use thiserror::Error;

/// Result type specialized for secret sharing operations.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Rejected inputs to a split or reconstruction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("threshold must be at least 1")]
    ZeroThreshold,
    #[error("threshold {threshold} exceeds share count {share_count}")]
    ThresholdExceedsShareCount { threshold: usize, share_count: usize },
    #[error("secret must be smaller than the modulus {modulus}")]
    SecretOutOfRange { modulus: BigUint },
    #[error("modulus must be at least 2, got {0}")]
    InvalidModulus(BigUint),
    #[error("modulus {modulus} must exceed the share count {share_count}")]
    ShareCountExceedsModulus { share_count: usize, modulus: BigUint },
    #[error("chunk size must be at least 1")]
    ZeroChunkSize,
    #[error("coefficient bound must be at least 1")]
    ZeroCoefficientBound,
    #[error("share x-coordinate must be non-zero")]
    ZeroCoordinate,
}

/// Errors originating from splitting or reconstructing a secret.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
    #[error("duplicate share x-coordinate {0}")]
    DuplicateCoordinate(u64),
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("{value} has no inverse modulo {modulus}")]
    NonInvertibleValue { value: BigUint, modulus: BigUint },
    #[error("shares do not interpolate to a non-negative integer")]
    InexactReconstruction,
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("chunk {index} does not decode to valid bytes")]
    MalformedChunk { index: usize },
    #[error(transparent)]
    Math(MathError),
}

impl From<MathError> for ShamirError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::NonInvertible { value, modulus } => {
                ShamirError::NonInvertibleValue { value, modulus }
            }
            MathError::InexactDivision { .. } => {
                ShamirError::InexactReconstruction
            }
            MathError::InvalidModulus(modulus) => {
                ParameterError::InvalidModulus(modulus).into()
            }
            other => ShamirError::Math(other),
        }
    }
}
