//! End-to-end scenarios across the `math` and `shamir-core` crates.

use math::prelude::*;
use math::prime::is_probable_prime;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shamir_core::{
    chunked, reconstruct, reconstruct_string, split, split_finite_field,
    split_finite_field_derived, split_string, Domain, ParameterError,
    Reconstructor, SecretSplitter, ShamirError, Share, SharedString,
    SharingConfig, SystemRandom,
};

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0xABCD)
}

#[test]
fn reference_field_example() {
    let secret = big!(1234);
    let modulus = big!(2_000_011);
    let shares = split_finite_field(&secret, 3, 5, &modulus, &mut rng())
        .expect("split succeeds");
    assert_eq!(shares.len(), 5);

    let subset: Vec<Share> = shares
        .iter()
        .filter(|share| [2, 4, 5].contains(&share.x))
        .cloned()
        .collect();
    assert_eq!(reconstruct(&subset, Some(&modulus)).unwrap(), secret);

    // two shares of a 3-of-5 split interpolate to some value; nothing more is
    // claimed about it
    let pair: Vec<Share> = subset.into_iter().take(2).collect();
    assert!(reconstruct(&pair, Some(&modulus)).is_ok());
}

#[test]
fn reference_string_example() {
    let shared = split_string(b"HELLO", 2, 3, 2, &mut rng()).expect("split");
    assert!(shared.shares.iter().all(|share| share.chunks.len() == 3));
    assert_eq!(reconstruct_string(&shared, 2).unwrap(), b"HELLO");
}

#[test]
fn shares_survive_json_persistence() {
    let secret = big!(u128::MAX);
    let shares = split(&secret, 2, 4, &mut rng()).unwrap();
    let json = serde_json::to_string(&shares).unwrap();
    let restored: Vec<Share> = serde_json::from_str(&json).unwrap();
    assert_eq!(reconstruct(&restored[2..], None).unwrap(), secret);

    let text = b"persisted message";
    let shared = split_string(text, 3, 5, 4, &mut rng()).unwrap();
    let json = serde_json::to_string(&shared).unwrap();
    let restored: SharedString = serde_json::from_str(&json).unwrap();
    assert_eq!(reconstruct_string(&restored, 3).unwrap(), text);
}

#[test]
fn configured_splitter_and_reconstructor() {
    let config = SharingConfig::try_from((4, 6)).unwrap();
    let splitter = SecretSplitter::from_config(config);
    let reconstructor = Reconstructor::new(config.threshold()).unwrap();
    let secret = big!(31_337);

    let domain = Domain::integer_for(&secret);
    let shares = splitter.split(&domain, &secret, &mut rng()).unwrap();
    assert_eq!(
        reconstructor.reconstruct(&domain, &shares[2..]).unwrap(),
        secret
    );

    let domain = Domain::field(big!(65_537)).unwrap();
    assert!(domain.is_prime_field());
    let shares = splitter.split(&domain, &secret, &mut rng()).unwrap();
    assert_eq!(reconstructor.reconstruct(&domain, &shares).unwrap(), secret);
}

#[test]
fn derived_moduli_are_prime() {
    let secret = big!(1) << 200u32;
    let (modulus, shares) =
        split_finite_field_derived(&secret, 3, 5, &mut rng()).unwrap();
    assert!(modulus > secret);
    assert!(is_probable_prime(&modulus));
    assert_eq!(reconstruct(&shares[1..4], Some(&modulus)).unwrap(), secret);
}

#[test]
fn system_random_round_trip() {
    let mut rng = SystemRandom;
    let secret = big!(42);
    let shares = split(&secret, 3, 5, &mut rng).unwrap();
    assert_eq!(reconstruct(&shares[..3], None).unwrap(), secret);

    let domain = chunked::integer_domain(3).unwrap();
    let shared =
        chunked::split_string_in(&domain, b"os entropy", 2, 3, 3, &mut rng)
            .unwrap();
    assert_eq!(reconstruct_string(&shared, 2).unwrap(), b"os entropy");
}

#[test]
fn shares_from_two_splits_with_the_same_x_are_rejected() {
    let modulus = big!(1_000_003);
    let a = split_finite_field(&big!(1), 2, 3, &modulus, &mut rng()).unwrap();
    let b = split_finite_field(&big!(2), 2, 3, &modulus, &mut rng()).unwrap();
    // same x on both sides: rejected before any arithmetic
    let mixed = vec![a[0].clone(), b[0].clone()];
    assert_eq!(
        reconstruct(&mixed, Some(&modulus)),
        Err(ShamirError::DuplicateCoordinate(1))
    );
}

#[test]
fn coordinates_are_compared_as_field_elements() {
    let modulus = big!(1_000_003);
    let shares =
        split_finite_field(&big!(9), 2, 3, &modulus, &mut rng()).unwrap();

    let mut wrapped = shares[1].clone();
    wrapped.x = 1_000_003;
    assert_eq!(
        reconstruct(&[shares[0].clone(), wrapped], Some(&modulus)),
        Err(ShamirError::InvalidParameters(ParameterError::ZeroCoordinate))
    );

    let mut wrapped = shares[1].clone();
    wrapped.x = 1_000_004;
    assert_eq!(
        reconstruct(&[shares[0].clone(), wrapped], Some(&modulus)),
        Err(ShamirError::DuplicateCoordinate(1_000_004))
    );
}
