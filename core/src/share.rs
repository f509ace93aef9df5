use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ShamirResult};

/// One participant's point `(x, y)` on the sharing polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    pub x: u64,
    pub y: BigUint,
}

impl Share {
    /// `x = 0` would hand out the secret itself and is rejected.
    pub fn new(x: u64, y: BigUint) -> ShamirResult<Self> {
        if x == 0 {
            return Err(ParameterError::ZeroCoordinate.into());
        }
        Ok(Share { x, y })
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShamirError;

    #[test]
    fn test_share_creation() {
        let share = Share::new(3, BigUint::from(42u8)).unwrap();
        assert_eq!(share.x, 3);
        assert_eq!(share.y, BigUint::from(42u8));
    }

    #[test]
    fn test_zero_coordinate_is_rejected() {
        assert_eq!(
            Share::new(0, BigUint::from(1u8)),
            Err(ShamirError::InvalidParameters(ParameterError::ZeroCoordinate))
        );
    }

    #[test]
    fn test_share_display() {
        let share = Share::new(2, BigUint::from(1494u32)).unwrap();
        assert_eq!(share.to_string(), "(2, 1494)");
    }

    #[test]
    fn test_share_json_round_trip() {
        let share = Share::new(5, BigUint::from(u64::MAX) << 70u32).unwrap();
        let json = serde_json::to_string(&share).unwrap();
        let back: Share = serde_json::from_str(&json).unwrap();
        assert_eq!(back, share);
    }
}
