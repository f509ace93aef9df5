//! Byte chunks as base-257 integers.
//!
//! Byte `b` becomes digit `b + 1`, so digit 0 never occurs and leading zero
//! bytes survive the trip through an integer.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::error::{ParameterError, ShamirError, ShamirResult};
use crate::params::CHUNK_RADIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkCodec {
    chunk_size: usize,
}

impl ChunkCodec {
    pub fn new(chunk_size: usize) -> ShamirResult<Self> {
        if chunk_size == 0 {
            return Err(ParameterError::ZeroChunkSize.into());
        }
        Ok(Self { chunk_size })
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks a message of `len` bytes occupies.
    #[inline]
    pub fn chunk_count(&self, len: usize) -> usize {
        len.div_ceil(self.chunk_size)
    }

    /// `257^chunk_size`, strictly greater than every encoded chunk.
    pub fn max_chunk_value(&self) -> BigUint {
        num_traits::pow(BigUint::from(CHUNK_RADIX), self.chunk_size)
    }

    pub fn encode_chunk(&self, chunk: &[u8]) -> BigUint {
        chunk.iter().fold(BigUint::zero(), |acc, &byte| {
            acc * CHUNK_RADIX + (u32::from(byte) + 1)
        })
    }

    /// Encode `message` chunk by chunk, the last chunk possibly shorter.
    pub fn encode(&self, message: &[u8]) -> Vec<BigUint> {
        message
            .chunks(self.chunk_size)
            .map(|chunk| self.encode_chunk(chunk))
            .collect()
    }

    /// Decode a single chunk; `index` is only used for error reporting.
    pub fn decode_chunk(
        &self,
        index: usize,
        value: &BigUint,
    ) -> ShamirResult<Vec<u8>> {
        let radix = BigUint::from(CHUNK_RADIX);
        let mut rest = value.clone();
        let mut bytes = Vec::with_capacity(self.chunk_size);

        while !rest.is_zero() {
            if bytes.len() == self.chunk_size {
                return Err(ShamirError::MalformedChunk { index });
            }
            let (quotient, digit) = rest.div_rem(&radix);
            let byte = digit
                .to_u32_digits()
                .first()
                .copied()
                .and_then(|d| d.checked_sub(1))
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ShamirError::MalformedChunk { index })?;
            bytes.push(byte);
            rest = quotient;
        }

        bytes.reverse();
        Ok(bytes)
    }

    /// Decode chunks back into a message of exactly `message_len` bytes.
    ///
    /// Every chunk but the last must hold `chunk_size` bytes, the last one
    /// the remainder.
    pub fn decode(
        &self,
        chunks: &[BigUint],
        message_len: usize,
    ) -> ShamirResult<Vec<u8>> {
        let expected = self.chunk_count(message_len);
        if chunks.len() != expected {
            return Err(ShamirError::LengthMismatch {
                expected,
                found: chunks.len(),
            });
        }

        let mut message = Vec::with_capacity(message_len);
        for (index, chunk) in chunks.iter().enumerate() {
            let bytes = self.decode_chunk(index, chunk)?;
            let remaining = message_len - index * self.chunk_size;
            let want = remaining.min(self.chunk_size);
            if bytes.len() != want {
                return Err(ShamirError::MalformedChunk { index });
            }
            message.extend_from_slice(&bytes);
        }
        Ok(message)
    }
}

impl Default for ChunkCodec {
    fn default() -> Self {
        Self {
            chunk_size: crate::params::DEFAULT_CHUNK_SIZE,
        }
    }
}
