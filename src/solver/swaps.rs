//! Swap sequences between two arrangements of the same letters
//!
//! The swaps are found by cycle decomposition:
//! 1. Map every square to the square its letter must move to. Squares that
//!    are already right map to themselves; the rest claim the first free
//!    target square wanting their letter.
//! 2. Follow the mapping to split the squares into position cycles.
//! 3. Split each cycle further along letter chains, which duplicate letters
//!    can make shorter than the position cycle.
//! 4. Realise each group with at most `n - 1` swaps.
//!
//! Results are deterministic for a given pair of strings.

use rustc_hash::FxHashSet;
use std::fmt;

/// Exchange of the letters on two squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Swap(pub usize, pub usize);

impl Swap {
    /// Apply this swap to a slice in place
    ///
    /// # Panics
    /// Panics if either square is out of bounds
    #[inline]
    pub fn apply_to<T>(self, squares: &mut [T]) {
        squares.swap(self.0, self.1);
    }

    /// The same swap with the lower square first
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            Self(self.1, self.0)
        }
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}", self.0, self.1)
    }
}

/// A square in a cycle with the letter it holds and the letter it wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    square: usize,
    start: u8,
    end: u8,
}

/// Swaps turning `start` into `end`
///
/// Both strings must hold the same letters. Swaps are applied in order.
///
/// # Panics
/// Panics if the strings differ in length
///
/// # Examples
/// ```
/// use waffle_solver::solver::{Swap, apply_swaps, find_swaps};
///
/// let target = "SIRENCOERABBIEIGWINCH";
/// let swaps = find_swaps("ISRENCOERABBIEIGWINCH", target);
/// assert_eq!(swaps, vec![Swap(0, 1)]);
///
/// let swaps = find_swaps("NIESRCOEWABBIEIGRCNIH", target);
/// assert_eq!(apply_swaps("NIESRCOEWABBIEIGRCNIH", &swaps), target);
/// ```
#[must_use]
pub fn find_swaps(start: &str, end: &str) -> Vec<Swap> {
    if start == end {
        return Vec::new();
    }

    let start = start.as_bytes();
    let end = end.as_bytes();
    assert_eq!(start.len(), end.len(), "arrangements must have equal length");

    let mapping = map_start_to_target(start, end);
    let mut current = start.to_vec();
    let mut visited = vec![false; start.len()];
    let mut swaps = Vec::new();

    for first in 0..start.len() {
        if visited[first] {
            continue;
        }

        let cycle = follow_cycle(&mapping, first);
        for &square in &cycle {
            visited[square] = true;
        }
        if cycle.len() < 2 {
            continue;
        }

        let entries: Vec<Entry> = cycle
            .iter()
            .map(|&square| Entry {
                square,
                start: start[square],
                end: end[square],
            })
            .collect();

        let groups = divide_by_letter_chains(&entries).unwrap_or_else(|| vec![entries]);
        for group in groups.iter().filter(|group| group.len() > 1) {
            realize_group(group, end, &mut current, &mut swaps);
        }
    }

    swaps
}

/// Number of swaps `find_swaps` needs between two arrangements
#[must_use]
pub fn swap_distance(start: &str, end: &str) -> usize {
    find_swaps(start, end).len()
}

fn map_start_to_target(start: &[u8], end: &[u8]) -> Vec<Option<usize>> {
    let mut mapping: Vec<Option<usize>> = start
        .iter()
        .zip(end)
        .enumerate()
        .map(|(square, (s, e))| (s == e).then_some(square))
        .collect();
    let mut available: Vec<bool> = mapping.iter().map(Option::is_none).collect();

    for square in 0..start.len() {
        if mapping[square].is_some() {
            continue;
        }
        let letter = start[square];
        if let Some(target) = (0..end.len()).find(|&t| available[t] && end[t] == letter) {
            available[target] = false;
            mapping[square] = Some(target);
        }
    }

    mapping
}

fn follow_cycle(mapping: &[Option<usize>], first: usize) -> Vec<usize> {
    let mut cycle = Vec::new();
    let mut square = first;

    while !cycle.contains(&square) {
        cycle.push(square);
        square = mapping[square].unwrap_or(square);
    }

    cycle
}

/// Split a position cycle into groups linked by letters
///
/// Starting from the first remaining entry, repeatedly move to an entry whose
/// current letter is the letter just wanted, until the chain reaches a letter
/// already seen. Returns `None` when a chain cannot continue or produces a
/// group that could not be sorted within itself.
fn divide_by_letter_chains(entries: &[Entry]) -> Option<Vec<Vec<Entry>>> {
    let mut remaining = entries.to_vec();
    let mut groups = Vec::new();

    while let Some(&first) = remaining.first() {
        let mut group = Vec::new();
        let mut seen: FxHashSet<u8> = FxHashSet::default();
        let mut entry = first;

        if entry.start == entry.end {
            group.push(entry);
        } else {
            while !seen.contains(&entry.end) {
                seen.insert(entry.start);
                group.push(entry);

                let candidates: Vec<Entry> = remaining
                    .iter()
                    .copied()
                    .filter(|e| e.start == entry.end && e.start != e.end && !group.contains(e))
                    .collect();

                if let Some(&closing) = candidates.iter().find(|e| seen.contains(&e.end)) {
                    group.push(closing);
                    break;
                }

                let &next = candidates.first()?;
                seen.insert(entry.end);
                entry = next;
            }
        }

        if !is_balanced(&group) {
            return None;
        }

        remaining.retain(|e| !group.contains(e));
        groups.push(group);
    }

    Some(groups)
}

/// Whether a group holds exactly the letters it wants
fn is_balanced(group: &[Entry]) -> bool {
    let mut have: Vec<u8> = group.iter().map(|e| e.start).collect();
    let mut want: Vec<u8> = group.iter().map(|e| e.end).collect();
    have.sort_unstable();
    want.sort_unstable();
    have == want
}

/// Sort a group in place, lowest square first
///
/// Each square takes its wanted letter from the first later square of the
/// group holding it, preferring one that wants this square's letter back.
/// Squares already holding their own letter are never touched.
fn realize_group(group: &[Entry], end: &[u8], current: &mut [u8], swaps: &mut Vec<Swap>) {
    let mut squares: Vec<usize> = group.iter().map(|e| e.square).collect();
    squares.sort_unstable();

    for (i, &square) in squares.iter().enumerate() {
        let wanted = end[square];
        if current[square] == wanted {
            continue;
        }

        // A wrong later square holding the wanted letter always exists, since
        // the unsorted tail holds exactly the letters it wants
        let later = &squares[i + 1..];
        let holds_wanted = |q: &usize| current[*q] == wanted && current[*q] != end[*q];
        let source = later
            .iter()
            .filter(|q| holds_wanted(q))
            .find(|&&q| end[q] == current[square])
            .or_else(|| later.iter().find(|q| holds_wanted(q)))
            .copied();

        if let Some(source) = source {
            current.swap(square, source);
            swaps.push(Swap(square, source));
        }
    }
}

/// Exchange the characters at the two squares of a swap
///
/// # Panics
/// Panics if either square is past the end of the string
#[must_use]
pub fn apply_swap(arrangement: &str, swap: Swap) -> String {
    let mut chars: Vec<char> = arrangement.chars().collect();
    swap.apply_to(&mut chars);
    chars.into_iter().collect()
}

/// Apply swaps left to right
#[must_use]
pub fn apply_swaps(arrangement: &str, swaps: &[Swap]) -> String {
    let mut chars: Vec<char> = arrangement.chars().collect();
    for &swap in swaps {
        swap.apply_to(&mut chars);
    }
    chars.into_iter().collect()
}

/// Whether applying `swaps` to `start` yields `end`
#[must_use]
pub fn validate_swaps(start: &str, end: &str, swaps: &[Swap]) -> bool {
    apply_swaps(start, swaps) == end
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    const TARGET: &str = "SIRENCOERABBIEIGWINCH";

    fn shuffled(text: &str, rng: &mut StdRng) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        chars.shuffle(rng);
        chars.into_iter().collect()
    }

    #[test]
    fn identical_strings_need_no_swaps() {
        assert!(find_swaps(TARGET, TARGET).is_empty());
        assert_eq!(swap_distance(TARGET, TARGET), 0);
    }

    #[test]
    fn single_transposition_is_one_swap() {
        let start = apply_swap(TARGET, Swap(0, 1));
        assert_eq!(start, "ISRENCOERABBIEIGWINCH");
        assert_eq!(find_swaps(&start, TARGET), vec![Swap(0, 1)]);
    }

    #[test]
    fn distant_two_cycle_is_one_swap() {
        let start = apply_swap(TARGET, Swap(3, 17));
        assert_eq!(find_swaps(&start, TARGET), vec![Swap(3, 17)]);
    }

    #[test]
    fn three_cycles_in_both_directions() {
        assert_eq!(find_swaps("ABC", "CAB"), vec![Swap(0, 2), Swap(1, 2)]);
        assert_eq!(find_swaps("CAB", "ABC"), vec![Swap(0, 1), Swap(1, 2)]);
        assert!(validate_swaps("ABC", "CAB", &find_swaps("ABC", "CAB")));
        assert!(validate_swaps("CAB", "ABC", &find_swaps("CAB", "ABC")));
    }

    #[test]
    fn duplicate_letters_split_into_two_cycles() {
        assert_eq!(find_swaps("ABAB", "BABA"), vec![Swap(0, 1), Swap(2, 3)]);
        assert_eq!(find_swaps("AAB", "BAA"), vec![Swap(0, 2)]);
    }

    #[test]
    fn sample_puzzle_is_five_swaps() {
        let start = "NIESRCOEWABBIEIGRCNIH";
        let swaps = find_swaps(start, TARGET);
        assert_eq!(swaps.len(), 5);
        assert!(validate_swaps(start, TARGET, &swaps));
    }

    #[test]
    fn stuck_letter_chain_falls_back_to_whole_cycle() {
        let (start, end) = ("CEAEDD", "DDCAEE");
        let mapping = map_start_to_target(start.as_bytes(), end.as_bytes());
        let cycle = follow_cycle(&mapping, 0);
        assert_eq!(cycle.len(), 6);

        let entries: Vec<Entry> = cycle
            .iter()
            .map(|&square| Entry {
                square,
                start: start.as_bytes()[square],
                end: end.as_bytes()[square],
            })
            .collect();
        assert!(divide_by_letter_chains(&entries).is_none());

        let swaps = find_swaps(start, end);
        assert!(validate_swaps(start, end, &swaps));
        assert!(swaps.len() <= 5);
    }

    #[test]
    fn random_shuffles_are_always_solved() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let start = shuffled(TARGET, &mut rng);
            let swaps = find_swaps(&start, TARGET);
            assert!(validate_swaps(&start, TARGET, &swaps), "{start} -> {TARGET}: {swaps:?}");
            assert!(swaps.len() < TARGET.len());
            assert!(swaps.iter().all(|s| s.0 != s.1));
        }
    }

    #[test]
    fn heavy_duplicates_are_always_solved() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let start = shuffled("AAABBBCCCDDAAABBBCCDD", &mut rng);
            let end = shuffled(&start, &mut rng);
            let swaps = find_swaps(&start, &end);
            assert!(validate_swaps(&start, &end, &swaps), "{start} -> {end}: {swaps:?}");
        }
    }

    #[test]
    fn apply_swap_is_an_involution() {
        let once = apply_swap(TARGET, Swap(4, 12));
        assert_ne!(once, TARGET);
        assert_eq!(apply_swap(&once, Swap(12, 4)), TARGET);
    }

    #[test]
    fn apply_swaps_folds_left() {
        let swaps = [Swap(0, 1), Swap(1, 2)];
        assert_eq!(apply_swaps("ABC", &swaps), "BCA");
        assert!(validate_swaps("ABC", "BCA", &swaps));
        assert!(!validate_swaps("ABC", "CAB", &swaps));
    }

    #[test]
    fn swap_display_and_normalize() {
        assert_eq!(Swap(5, 2).normalized(), Swap(2, 5));
        assert_eq!(format!("{}", Swap(0, 1)), "0 ↔ 1");
    }
}
