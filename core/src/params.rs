use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ShamirError, ShamirResult};

/// Radix of the chunk encoding: one digit per byte value plus the reserved 0.
pub const CHUNK_RADIX: u32 = 257;

/// Bytes per chunk when the caller has no preference.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Smallest coefficient bound used for integer-mode sharing, as a power of two.
pub const MIN_COEFFICIENT_BOUND_BITS: u32 = 64;

/// Default sharing configuration: any 3 of 5.
pub const DEFAULT_THRESHOLD: usize = 3;
pub const DEFAULT_SHARE_COUNT: usize = 5;

/// Validate the relation between threshold and share counts.
pub fn validate_threshold_config(
    threshold: usize,
    share_count: usize,
) -> ShamirResult<()> {
    if threshold == 0 {
        return Err(ParameterError::ZeroThreshold.into());
    }
    if threshold > share_count {
        return Err(ParameterError::ThresholdExceedsShareCount {
            threshold,
            share_count,
        }
        .into());
    }
    Ok(())
}

/// A validated `(K, N)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct SharingConfig {
    threshold: usize,
    share_count: usize,
}

impl SharingConfig {
    pub fn new(threshold: usize, share_count: usize) -> ShamirResult<Self> {
        validate_threshold_config(threshold, share_count)?;
        Ok(Self {
            threshold,
            share_count,
        })
    }

    #[inline]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    pub const fn share_count(&self) -> usize {
        self.share_count
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            share_count: DEFAULT_SHARE_COUNT,
        }
    }
}

impl TryFrom<(usize, usize)> for SharingConfig {
    type Error = ShamirError;

    fn try_from(
        (threshold, share_count): (usize, usize),
    ) -> Result<Self, Self::Error> {
        Self::new(threshold, share_count)
    }
}

impl From<SharingConfig> for (usize, usize) {
    fn from(config: SharingConfig) -> Self {
        (config.threshold, config.share_count)
    }
}
