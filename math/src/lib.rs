pub mod error;
pub mod field;
pub mod fraction;
pub mod integer;
mod macros;
pub mod poly;
pub mod prelude;
pub mod prime;
pub mod random;
pub mod traits;

pub use num_bigint;

pub use error::{MathError, Result};
pub use field::PrimeField;
pub use fraction::{Fraction, Rationals};
pub use integer::Integers;
pub use poly::Polynomial;
