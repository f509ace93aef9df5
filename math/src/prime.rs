//! Probabilistic primality testing and prime selection.

use std::sync::OnceLock;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::Result;
use crate::random::{RandomSource, SystemRandom};

/// Random Miller–Rabin bases tried on top of the fixed ones.
pub const MILLER_RABIN_ROUNDS: usize = 10;

/// Width factor of the window a random prime is searched in.
pub const PRIME_SEARCH_SPAN: u64 = 100_000_000;

/// Trial division covers every prime below this.
const SMALL_PRIME_LIMIT: usize = 1000;

/// With bases 2..=37 Miller–Rabin is exact below this value, the smallest
/// strong pseudoprime to all of them.
const DETERMINISTIC_LIMIT: u128 = 318_665_857_834_031_151_167_461;

const FIXED_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn small_primes() -> &'static [u32] {
    static PRIMES: OnceLock<Vec<u32>> = OnceLock::new();
    PRIMES.get_or_init(|| {
        let mut composite = vec![false; SMALL_PRIME_LIMIT];
        let mut primes = Vec::new();
        for n in 2..SMALL_PRIME_LIMIT {
            if composite[n] {
                continue;
            }
            primes.push(n as u32);
            for multiple in (n * n..SMALL_PRIME_LIMIT).step_by(n) {
                composite[multiple] = true;
            }
        }
        primes
    })
}

/// Primality test backed by the operating system RNG.
pub fn is_probable_prime(n: &BigUint) -> bool {
    is_probable_prime_with(n, MILLER_RABIN_ROUNDS, &mut SystemRandom)
}

/// Trial division, then Miller–Rabin with the fixed bases `2..=37` and
/// `rounds` extra random bases drawn from `rng`.
///
/// Exact below ~3.2·10²³; above that a composite passes with probability at
/// most `4^-(12 + rounds)`.
pub fn is_probable_prime_with<R>(
    n: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> bool
where
    R: RandomSource + ?Sized,
{
    if let Some(small) = n.to_u32() {
        if (small as usize) < SMALL_PRIME_LIMIT {
            return small_primes().binary_search(&small).is_ok();
        }
    }
    if small_primes()
        .iter()
        .any(|&p| (n % p).is_zero())
    {
        return false;
    }

    let one = BigUint::one();
    let n_minus_one = n - &one;
    let shift = n_minus_one.trailing_zeros().unwrap_or(0);
    let odd_part = &n_minus_one >> shift;

    let is_witness = |base: &BigUint| -> bool {
        let mut x = base.modpow(&odd_part, n);
        if x == one || x == n_minus_one {
            return false;
        }
        for _ in 1..shift {
            x = x.modpow(&BigUint::from(2u8), n);
            if x == n_minus_one {
                return false;
            }
            if x == one {
                return true;
            }
        }
        true
    };

    if FIXED_BASES
        .iter()
        .any(|&base| is_witness(&BigUint::from(base)))
    {
        return false;
    }

    if n.to_u128().is_some_and(|value| value < DETERMINISTIC_LIMIT) {
        return true;
    }

    // Bases are drawn from [2, n - 2]; n is well above 1000 here.
    let low = BigUint::from(2u8);
    let high = &n_minus_one;
    for _ in 0..rounds {
        let Ok(base) = rng.next_in_range(&low, high) else {
            return false;
        };
        if is_witness(&base) {
            return false;
        }
    }
    true
}

/// The smallest prime strictly greater than `floor`.
pub fn next_prime_above(floor: &BigUint) -> BigUint {
    next_prime_above_with(floor, &mut SystemRandom)
}

fn next_prime_above_with<R>(floor: &BigUint, rng: &mut R) -> BigUint
where
    R: RandomSource + ?Sized,
{
    let two = BigUint::from(2u8);
    if floor < &two {
        return two;
    }
    let mut candidate = floor + 1u8;
    if candidate.is_even() {
        candidate += 1u8;
    }
    while !is_probable_prime_with(&candidate, MILLER_RABIN_ROUNDS, rng) {
        candidate += &two;
    }
    candidate
}

/// A prime above `floor`, found by scanning up from a random start in
/// `[floor, PRIME_SEARCH_SPAN · floor]`.
///
/// The result always exceeds `floor` but is not a predictable function of
/// it. A zero floor is treated as one.
pub fn random_prime_above<R>(floor: &BigUint, rng: &mut R) -> Result<BigUint>
where
    R: RandomSource + ?Sized,
{
    let floor = if floor.is_zero() {
        BigUint::one()
    } else {
        floor.clone()
    };
    let ceiling = &floor * PRIME_SEARCH_SPAN + 1u8;
    let start = rng.next_in_range(&floor, &ceiling)?;
    Ok(next_prime_above_with(&start, rng))
}
