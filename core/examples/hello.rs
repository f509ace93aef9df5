use math::big;
use shamir_core::{
    reconstruct, reconstruct_string, split_finite_field, split_string,
    SystemRandom,
};

const MESSAGE: &[u8] = b"HELLO";

/// Split a number over a small field and a short message chunk by chunk,
/// then recover both from a subset of the shares.
fn main() {
    let mut rng = SystemRandom;

    let modulus = big!(2_000_011);
    let secret = big!(1234);
    let shares = split_finite_field(&secret, 3, 5, &modulus, &mut rng)
        .expect("field split should succeed");
    for share in &shares {
        println!("share {share}");
    }

    let subset: Vec<_> = shares
        .iter()
        .filter(|share| [2, 4, 5].contains(&share.x))
        .cloned()
        .collect();
    let recovered = reconstruct(&subset, Some(&modulus))
        .expect("reconstruction should succeed");
    assert_eq!(recovered, secret, "any three shares recover the secret");
    println!("recovered {recovered} from shares 2, 4 and 5");

    let shared = split_string(MESSAGE, 2, 3, 2, &mut rng)
        .expect("string split should succeed");
    println!(
        "{} bytes in {} chunks per share",
        shared.message_len,
        shared.shares[0].chunk_count()
    );
    let text = reconstruct_string(&shared, 2)
        .expect("string reconstruction should succeed");
    assert_eq!(text, MESSAGE);
    println!("recovered {:?}", String::from_utf8_lossy(&text));
}
