use num_bigint::BigUint;

use crate::chunked::ChunkedShare;
use crate::error::ShamirResult;

/// Collects one participant's per-chunk values while a message is split.
pub(crate) struct ShareAccumulator {
    pub(crate) x: u64,
    pub(crate) chunks: Vec<BigUint>,
}

impl ShareAccumulator {
    pub(crate) fn new(x: u64, chunk_count: usize) -> Self {
        Self {
            x,
            chunks: vec![BigUint::default(); chunk_count],
        }
    }

    pub(crate) fn insert(&mut self, chunk_idx: usize, value: BigUint) {
        if let Some(slot) = self.chunks.get_mut(chunk_idx) {
            *slot = value;
        }
    }

    pub(crate) fn finalize(self) -> ShamirResult<ChunkedShare> {
        ChunkedShare::new(self.x, self.chunks)
    }
}
