//! String-seeded pseudo-random shuffling for reproducible schedules.
//!
//! Everything here is a pure function of a seed string: the same seed
//! produces the same sequence in every process, on every platform, forever.
//! That property is what lets the rotation scheduler rebuild any day's
//! choice without storing a schedule.
//!
//! # Pipeline
//!
//! ```text
//!  seed: &str ──▶ seed_hash (i32) ──▶ SeededRng (31-bit LCG) ──▶ Fisher–Yates
//! ```
//!
//! # Quick start
//!
//! ```
//! use orbis_shuffle::seeded_shuffle;
//!
//! let items = [1, 2, 3, 4, 5];
//! let shuffled = seeded_shuffle(&items, "seed");
//! assert_eq!(shuffled, vec![3, 2, 5, 1, 4]);
//! assert_eq!(items, [1, 2, 3, 4, 5]);
//! ```

mod hash;
mod rng;
mod shuffle;

pub use hash::seed_hash;
pub use rng::SeededRng;
pub use shuffle::{seeded_shuffle, shuffle_in_place};
