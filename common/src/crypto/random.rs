/// Random number generation for ledger entropy
///
/// Genetic tags are cosmetic and carry no security weight. A ledger draws
/// them from a `StdRng` which is either seeded from the operating system
/// (`OsRng`) or from a fixed seed for reproducible runs.
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Generate random bytes from the operating system
///
/// # Example
/// ```
/// use arena_common::crypto::random::secure_random_bytes;
///
/// let seed = secure_random_bytes::<32>();
/// assert_eq!(seed.len(), 32);
/// ```
pub fn secure_random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Build a generator seeded from the operating system
pub fn entropy_rng() -> StdRng {
    StdRng::from_seed(secure_random_bytes::<32>())
}

/// Build a deterministic generator from a numeric seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
