//! Shamir threshold secret sharing.
//!
//! A secret is split into `N` shares such that any `K` of them reconstruct it
//! exactly, over plain integers, a prime field, or chunk by chunk for byte
//! strings.

pub(crate) mod accumulator;
pub mod chunked;
pub mod codec;
pub mod domain;
pub mod error;
pub mod params;
pub mod reconstruct;
pub mod share;
pub mod splitter;

pub use chunked::{
    reconstruct_chunks, reconstruct_string, split_string, split_string_in,
    ChunkedShare, SharedString,
};
pub use domain::Domain;
pub use error::{ParameterError, ShamirError, ShamirResult};
pub use params::SharingConfig;
pub use reconstruct::{reconstruct, reconstruct_with_threshold, Reconstructor};
pub use share::Share;
pub use splitter::{
    derive_modulus, split, split_finite_field, split_finite_field_derived,
    SecretSplitter,
};

pub use math::random::{RandomSource, SystemRandom};
