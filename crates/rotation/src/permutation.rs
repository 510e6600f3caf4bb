//! Per-cycle permutation builders.
//!
//! A cycle permutation orders every pool dataset exactly once. Two builders
//! exist: the weighted builder interleaves separately shuffled featured and
//! exploratory lists so featured datasets arrive at the target rate, and the
//! unweighted builder shuffles the whole pool at once.

use std::collections::HashSet;

use orbis_shuffle::seeded_shuffle;
use tracing::warn;

/// Seed for the unweighted shuffle of `cycle`.
pub(crate) fn cycle_seed(base: &str, cycle: i64) -> String {
    format!("{base}-cycle-{cycle}")
}

/// Seed for the featured partition of `cycle`.
pub(crate) fn featured_seed(base: &str, cycle: i64) -> String {
    format!("{base}-featured-{cycle}")
}

/// Seed for the exploratory partition of `cycle`.
pub(crate) fn exploratory_seed(base: &str, cycle: i64) -> String {
    format!("{base}-exploratory-{cycle}")
}

/// Shuffles the full pool once.
pub(crate) fn unweighted<'a>(pool: &[&'a str], base: &str, cycle: i64) -> Vec<&'a str> {
    seeded_shuffle(pool, &cycle_seed(base, cycle))
}

/// Interleaves shuffled featured and exploratory lists.
///
/// At position `pos` the target count of featured datasets placed so far is
/// `round((pos + 1) * fraction)`. A featured dataset is drawn while the
/// running count is below target; otherwise an exploratory one, and once a
/// list runs dry the other fills the rest. Every input appears exactly once.
pub(crate) fn weighted<'a>(
    featured: &[&'a str],
    exploratory: &[&'a str],
    fraction: f64,
    base: &str,
    cycle: i64,
) -> Vec<&'a str> {
    let featured = seeded_shuffle(featured, &featured_seed(base, cycle));
    let exploratory = seeded_shuffle(exploratory, &exploratory_seed(base, cycle));
    interleave(&featured, &exploratory, fraction)
}

fn interleave<'a>(featured: &[&'a str], exploratory: &[&'a str], fraction: f64) -> Vec<&'a str> {
    let total = featured.len() + exploratory.len();
    let mut pattern = Vec::with_capacity(total);
    let mut f = featured.iter();
    let mut e = exploratory.iter();
    let mut featured_placed = 0usize;

    for pos in 0..total {
        let expected = ((pos + 1) as f64 * fraction).round() as usize;
        let next = if featured_placed < expected {
            f.next().inspect(|_| featured_placed += 1).or_else(|| e.next())
        } else {
            e.next()
                .or_else(|| f.next().inspect(|_| featured_placed += 1))
        };
        match next {
            Some(id) => pattern.push(*id),
            None => break,
        }
    }
    pattern
}

/// Returns `true` if `pattern` orders every pool id exactly once.
pub(crate) fn is_complete(pattern: &[&str], pool: &[&str]) -> bool {
    if pattern.len() != pool.len() {
        return false;
    }
    let mut seen = HashSet::with_capacity(pattern.len());
    if !pattern.iter().all(|id| seen.insert(*id)) {
        return false;
    }
    pool.iter().all(|id| seen.contains(id))
}

/// Returns `candidate` if it is a complete permutation of `pool`, otherwise
/// logs the degeneracy and returns the unweighted shuffle for `cycle`.
pub(crate) fn checked_or_unweighted<'a>(
    candidate: Vec<&'a str>,
    pool: &[&'a str],
    base: &str,
    cycle: i64,
) -> Vec<&'a str> {
    if is_complete(&candidate, pool) {
        return candidate;
    }
    warn!(
        cycle,
        pattern_len = candidate.len(),
        pool_size = pool.len(),
        "weighted permutation degenerate; using unweighted shuffle"
    );
    unweighted(pool, base, cycle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_distinct_per_role() {
        assert_eq!(cycle_seed("s", 3), "s-cycle-3");
        assert_eq!(featured_seed("s", 3), "s-featured-3");
        assert_eq!(exploratory_seed("s", -1), "s-exploratory--1");
    }

    #[test]
    fn interleave_half() {
        let p = interleave(&["F1", "F2"], &["E1", "E2"], 0.5);
        // expected: round(0.5)=1, round(1.0)=1, round(1.5)=2, round(2.0)=2
        assert_eq!(p, vec!["F1", "E1", "F2", "E2"]);
    }

    #[test]
    fn interleave_front_loads_featured() {
        let p = interleave(&["F1", "F2", "F3"], &["E1", "E2", "E3", "E4"], 0.7);
        // targets: 1, 1, 2, 3, 4, 4, 5
        assert_eq!(p, vec!["F1", "E1", "F2", "F3", "E2", "E3", "E4"]);
    }

    #[test]
    fn interleave_exhausted_featured_falls_back() {
        let p = interleave(&["F1"], &["E1", "E2"], 1.0);
        assert_eq!(p, vec!["F1", "E1", "E2"]);
    }

    #[test]
    fn interleave_zero_fraction_defers_featured() {
        let p = interleave(&["F1", "F2"], &["E1", "E2"], 0.0);
        assert_eq!(p, vec!["E1", "E2", "F1", "F2"]);
    }

    #[test]
    fn weighted_known_pattern() {
        let p = weighted(&["a", "b"], &["c", "d"], 0.5, "test", 0);
        assert_eq!(p, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn unweighted_known_pattern() {
        let p = unweighted(&["a", "b", "c", "d"], "test", 0);
        assert_eq!(p, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn weighted_is_complete() {
        let featured = ["f0", "f1", "f2", "f3", "f4"];
        let exploratory = ["e0", "e1", "e2"];
        let pool: Vec<&str> = featured.iter().chain(exploratory.iter()).copied().collect();
        for cycle in -3..10 {
            let p = weighted(&featured, &exploratory, 0.6, "complete", cycle);
            assert!(is_complete(&p, &pool), "cycle {cycle}: {p:?}");
        }
    }

    #[test]
    fn completeness_check() {
        let pool = ["a", "b", "c"];
        assert!(is_complete(&["c", "a", "b"], &pool));
        assert!(!is_complete(&["a", "b"], &pool));
        assert!(!is_complete(&["a", "a", "b"], &pool));
        assert!(!is_complete(&["a", "b", "z"], &pool));
    }

    #[test]
    fn degenerate_candidate_replaced() {
        let pool = ["a", "b", "c", "d"];
        let fixed = checked_or_unweighted(vec!["a", "a", "b", "c"], &pool, "test", 0);
        assert_eq!(fixed, unweighted(&pool, "test", 0));

        let good = vec!["d", "c", "b", "a"];
        assert_eq!(checked_or_unweighted(good.clone(), &pool, "test", 0), good);
    }
}
