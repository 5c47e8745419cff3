//! Best next swap when several answers remain possible
//!
//! Every swap of two distinct squares is tried once. A swap scores the average
//! number of swaps still needed to reach each candidate answer afterwards, and
//! the lowest score wins. Scores are computed in parallel but the winner is
//! picked in iteration order, so ties go to the lowest `(from, to)` pair.

use super::swaps::{Swap, apply_swap, swap_distance};
use rayon::prelude::*;

/// A candidate swap and its expected remaining swap count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapScore {
    pub swap: Swap,
    pub score: f64,
}

/// Every pair of distinct squares, ordered by first then second square
#[must_use]
pub fn all_swaps(squares: usize) -> Vec<Swap> {
    (0..squares)
        .flat_map(|from| (from + 1..squares).map(move |to| Swap(from, to)))
        .collect()
}

/// Average swaps left over all candidates after applying `swap`
///
/// Returns infinity for an empty candidate list.
#[must_use]
pub fn calculate_swap_score<S: AsRef<str>>(start: &str, swap: Swap, candidates: &[S]) -> f64 {
    if candidates.is_empty() {
        return f64::INFINITY;
    }

    let swapped = apply_swap(start, swap);
    let total: usize = candidates
        .iter()
        .map(|candidate| swap_distance(&swapped, candidate.as_ref()))
        .sum();

    total as f64 / candidates.len() as f64
}

/// Scores for every possible swap, in iteration order
#[must_use]
pub fn rank_swaps<S: AsRef<str> + Sync>(start: &str, candidates: &[S]) -> Vec<SwapScore> {
    all_swaps(start.chars().count())
        .par_iter()
        .map(|&swap| SwapScore {
            swap,
            score: calculate_swap_score(start, swap, candidates),
        })
        .collect()
}

/// The swap that minimises the expected remaining swaps
///
/// With a single candidate this is simply the first swap towards it.
/// Returns `None` when there are no candidates, or when the only candidate is
/// already the current arrangement.
///
/// # Examples
/// ```
/// use waffle_solver::solver::{Swap, find_best_swap};
///
/// let candidates = ["SIRENCOERABBIEIGWINCH", "SIERNCOERABBIEIGWINCH"];
/// let best = find_best_swap("ISRENCOERABBIEIGWINCH", &candidates);
/// assert_eq!(best, Some(Swap(0, 1)));
/// ```
#[must_use]
pub fn find_best_swap<S: AsRef<str> + Sync>(start: &str, candidates: &[S]) -> Option<Swap> {
    match candidates {
        [] => None,
        [only] => super::swaps::find_swaps(start, only.as_ref()).first().copied(),
        _ => {
            let mut best: Option<SwapScore> = None;
            for scored in rank_swaps(start, candidates) {
                if best.is_none_or(|b| scored.score < b.score) {
                    best = Some(scored);
                }
            }
            best.map(|b| b.swap)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "SIRENCOERABBIEIGWINCH";
    // TARGET with squares 2 and 3 exchanged
    const OTHER: &str = "SIERNCOERABBIEIGWINCH";
    // TARGET with squares 0 and 1 exchanged
    const START: &str = "ISRENCOERABBIEIGWINCH";

    #[test]
    fn all_swaps_covers_every_pair_once() {
        let swaps = all_swaps(21);
        assert_eq!(swaps.len(), 210);
        assert_eq!(swaps[0], Swap(0, 1));
        assert_eq!(swaps[1], Swap(0, 2));
        assert_eq!(swaps[20], Swap(1, 2));
        assert_eq!(swaps[209], Swap(19, 20));
    }

    #[test]
    fn no_candidates_gives_none() {
        let empty: [&str; 0] = [];
        assert_eq!(find_best_swap(START, &empty), None);
    }

    #[test]
    fn single_candidate_takes_first_swap() {
        assert_eq!(find_best_swap(START, &[TARGET]), Some(Swap(0, 1)));
        assert_eq!(find_best_swap(TARGET, &[TARGET]), None);
    }

    #[test]
    fn picks_swap_closest_on_average() {
        let candidates = [TARGET, OTHER];
        assert_eq!(find_best_swap(START, &candidates), Some(Swap(0, 1)));

        let score = calculate_swap_score(START, Swap(0, 1), &candidates);
        assert!((score - 0.5).abs() < f64::EPSILON);

        let worse = calculate_swap_score(START, Swap(2, 3), &candidates);
        assert!((worse - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn best_swap_has_minimum_score() {
        let candidates = [TARGET, OTHER];
        let ranked = rank_swaps(START, &candidates);
        assert_eq!(ranked.len(), 210);

        let best = find_best_swap(START, &candidates).unwrap();
        let best_score = ranked.iter().find(|s| s.swap == best).unwrap().score;
        assert!(ranked.iter().all(|s| s.score >= best_score));
    }

    #[test]
    fn ties_go_to_first_pair() {
        // Every swap leaves both candidates equally far away
        let candidates = ["BA", "BA"];
        assert_eq!(find_best_swap("AB", &candidates), Some(Swap(0, 1)));

        let candidates = ["ABCD", "ABCD"];
        assert_eq!(find_best_swap("ABCD", &candidates), Some(Swap(0, 1)));
    }

    #[test]
    fn repeated_calls_agree() {
        let candidates = vec![TARGET.to_string(), OTHER.to_string()];
        let first = find_best_swap(START, &candidates);
        for _ in 0..5 {
            assert_eq!(find_best_swap(START, &candidates), first);
        }
    }

    #[test]
    fn empty_candidates_score_infinite() {
        let empty: [&str; 0] = [];
        assert!(calculate_swap_score(START, Swap(0, 1), &empty).is_infinite());
    }
}
