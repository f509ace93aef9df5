#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Every `k`-element subset of `items`, preserving order.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let (head, tail) = (&items[0], &items[1..]);
    let mut with_head: Vec<Vec<T>> = combinations(tail, k - 1)
        .into_iter()
        .map(|mut rest| {
            rest.insert(0, head.clone());
            rest
        })
        .collect();
    with_head.extend(combinations(tail, k));
    with_head
}
