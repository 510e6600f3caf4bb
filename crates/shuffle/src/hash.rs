//! 32-bit multiplicative string hash.

/// Hashes a seed string into a signed 32-bit integer.
///
/// Iterates the UTF-16 code units of `seed`, folding each into
/// `hash * 31 + unit` with two's-complement wraparound. This is the common
/// multiply-31 string hash, so any client sharing the schedule can derive
/// the same seeds.
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}
