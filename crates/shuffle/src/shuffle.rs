//! Fisher–Yates shuffle driven by [`SeededRng`].

use crate::rng::SeededRng;

/// Shuffles `items` in place, consuming one draw per position.
///
/// Walks from the last index down to 1, swapping index `i` with a drawn
/// index in `0..=i`.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut SeededRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, fully determined by `seed`.
///
/// The input is left untouched. Identical `(items, seed)` pairs always
/// yield identical output.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut out = items.to_vec();
    let mut rng = SeededRng::new(seed);
    shuffle_in_place(&mut out, &mut rng);
    out
}
