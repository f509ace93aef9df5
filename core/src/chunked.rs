//! Sharing byte strings chunk by chunk.
//!
//! Each chunk is encoded as an integer (see [`ChunkCodec`]) and shared on its
//! own polynomial. Participant `x` receives the `x`-th share of every chunk,
//! in chunk order.

use math::prelude::*;
use serde::{Deserialize, Serialize};

use crate::accumulator::ShareAccumulator;
use crate::codec::ChunkCodec;
use crate::domain::Domain;
use crate::error::{ParameterError, ShamirError, ShamirResult};
use crate::params::validate_threshold_config;
use crate::reconstruct::{ensure_distinct_coordinates, Reconstructor};
use crate::share::Share;
use crate::splitter::{derive_modulus, SecretSplitter};

/// One participant's shares of every chunk of a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkedShare {
    pub x: u64,
    pub chunks: Vec<BigUint>,
}

impl ChunkedShare {
    pub fn new(x: u64, chunks: Vec<BigUint>) -> ShamirResult<Self> {
        if x == 0 {
            return Err(ParameterError::ZeroCoordinate.into());
        }
        Ok(Self { x, chunks })
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// This participant's share of chunk `index`.
    pub fn share_at(&self, index: usize) -> Option<Share> {
        self.chunks.get(index).map(|y| Share {
            x: self.x,
            y: y.clone(),
        })
    }
}

/// Everything needed to reconstruct a shared message, apart from choosing
/// which participants take part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedString {
    pub chunk_size: usize,
    pub message_len: usize,
    pub domain: Domain,
    pub shares: Vec<ChunkedShare>,
}

/// Integer domain whose coefficient bound matches the chunk encoding, so the
/// chunk size controls how large shares grow.
pub fn integer_domain(chunk_size: usize) -> ShamirResult<Domain> {
    Domain::integer(ChunkCodec::new(chunk_size)?.max_chunk_value())
}

/// Split `text` over a random prime field large enough for every chunk.
pub fn split_string<R>(
    text: &[u8],
    threshold: usize,
    share_count: usize,
    chunk_size: usize,
    rng: &mut R,
) -> ShamirResult<SharedString>
where
    R: RandomSource + ?Sized,
{
    validate_threshold_config(threshold, share_count)?;
    let codec = ChunkCodec::new(chunk_size)?;
    let modulus = derive_modulus(&codec.max_chunk_value(), share_count, rng)?;
    split_string_in(
        &Domain::Field { modulus },
        text,
        threshold,
        share_count,
        chunk_size,
        rng,
    )
}

/// Split `text` in an explicit domain.
pub fn split_string_in<R>(
    domain: &Domain,
    text: &[u8],
    threshold: usize,
    share_count: usize,
    chunk_size: usize,
    rng: &mut R,
) -> ShamirResult<SharedString>
where
    R: RandomSource + ?Sized,
{
    let splitter = SecretSplitter::new(threshold, share_count)?;
    let codec = ChunkCodec::new(chunk_size)?;
    let chunks = codec.encode(text);

    let mut accumulators: Vec<ShareAccumulator> = (1..=share_count as u64)
        .map(|x| ShareAccumulator::new(x, chunks.len()))
        .collect();

    for (chunk_idx, chunk) in chunks.iter().enumerate() {
        let shares = splitter.split(domain, chunk, rng)?;
        for (accumulator, share) in accumulators.iter_mut().zip(shares) {
            accumulator.insert(chunk_idx, share.y);
        }
    }

    let shares = accumulators
        .into_iter()
        .map(ShareAccumulator::finalize)
        .collect::<ShamirResult<Vec<_>>>()?;

    Ok(SharedString {
        chunk_size,
        message_len: text.len(),
        domain: domain.clone(),
        shares,
    })
}

/// Reconstruct the message from the first `threshold` participants of
/// `shared.shares`.
pub fn reconstruct_string(
    shared: &SharedString,
    threshold: usize,
) -> ShamirResult<Vec<u8>> {
    reconstruct_chunks(
        shared.chunk_size,
        shared.message_len,
        &shared.domain,
        &shared.shares,
        threshold,
    )
}

/// Reconstruct every chunk from the first `threshold` participants and
/// decode the message.
///
/// Every supplied share must carry exactly one value per chunk.
pub fn reconstruct_chunks(
    chunk_size: usize,
    message_len: usize,
    domain: &Domain,
    shares: &[ChunkedShare],
    threshold: usize,
) -> ShamirResult<Vec<u8>> {
    let codec = ChunkCodec::new(chunk_size)?;
    let reconstructor = Reconstructor::new(threshold)?;

    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            required: threshold,
            provided: shares.len(),
        });
    }
    ensure_distinct_coordinates(shares.iter().map(|share| share.x))?;

    let expected = codec.chunk_count(message_len);
    let mismatched = shares
        .iter()
        .find(|share| share.chunk_count() != expected);
    if let Some(share) = mismatched {
        return Err(ShamirError::LengthMismatch {
            expected,
            found: share.chunk_count(),
        });
    }

    let active = &shares[..threshold];
    let chunks = (0..expected)
        .map(|index| {
            let points: Vec<Share> = active
                .iter()
                .filter_map(|share| share.share_at(index))
                .collect();
            reconstructor.reconstruct(domain, &points)
        })
        .collect::<ShamirResult<Vec<_>>>()?;

    codec.decode(&chunks, message_len)
}
