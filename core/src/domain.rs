use math::prelude::*;
use math::prime::is_probable_prime;
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ShamirResult};
use crate::params::MIN_COEFFICIENT_BOUND_BITS;

/// The arithmetic a sharing runs in, chosen once per call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Domain {
    /// Unbounded integers; polynomial coefficients are drawn from
    /// `[0, coefficient_bound)` and reconstruction is exact over the
    /// rationals.
    Integer { coefficient_bound: BigUint },
    /// Residues modulo `modulus`.
    Field { modulus: BigUint },
}

impl Domain {
    pub fn integer(coefficient_bound: BigUint) -> ShamirResult<Self> {
        if coefficient_bound == BigUint::default() {
            return Err(ParameterError::ZeroCoefficientBound.into());
        }
        Ok(Domain::Integer { coefficient_bound })
    }

    /// Integer domain with coefficients sized for `secret`.
    pub fn integer_for(secret: &BigUint) -> Self {
        Domain::Integer {
            coefficient_bound: default_coefficient_bound(secret),
        }
    }

    pub fn field(modulus: BigUint) -> ShamirResult<Self> {
        let field = PrimeField::new(modulus)?;
        Ok(Domain::Field {
            modulus: field.modulus().clone(),
        })
    }

    pub fn modulus(&self) -> Option<&BigUint> {
        match self {
            Domain::Integer { .. } => None,
            Domain::Field { modulus } => Some(modulus),
        }
    }

    /// Whether this is a field domain whose modulus passes Miller–Rabin.
    pub fn is_prime_field(&self) -> bool {
        self.modulus().is_some_and(is_probable_prime)
    }
}

/// `max(secret + 1, 2^64)`: a zero secret still gets random coefficients.
pub fn default_coefficient_bound(secret: &BigUint) -> BigUint {
    let floor = BigUint::from(1u8) << MIN_COEFFICIENT_BOUND_BITS;
    (secret + 1u8).max(floor)
}
