/// Random person identifiers.
///
/// Identifiers are fixed-length lowercase strings sampled independently.
/// Collisions are allowed and never checked for — the downstream simplifier
/// treats equal strings as the same person, which is exactly what a
/// stress-test input wants.
use rand::Rng;

/// Length of every generated identifier.
pub const IDENT_LEN: usize = 12;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Sample one identifier: `IDENT_LEN` chars drawn uniformly from `a-z`.
pub fn random_ident<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(IDENT_LEN);
    for _ in 0..IDENT_LEN {
        id.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    id
}
