//! Dictionary for Waffle solving
//!
//! Provides the embedded word list, file loading, the constraint-searchable
//! [`Trie`] and the process-wide index shared by the solver and generator.
//!
//! The index is built from the embedded words on first use and is read-only
//! afterwards. [`install_index`] swaps in a custom dictionary and
//! [`reset_index`] drops it so the next access rebuilds.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{WORDS, WORDS_COUNT};
pub use trie::{Constraint, Trie};

use log::info;
use std::sync::{Arc, PoisonError, RwLock};

static INDEX: RwLock<Option<Arc<Trie>>> = RwLock::new(None);

/// Shared dictionary index, building it from the embedded words if absent
///
/// # Examples
/// ```
/// use waffle_solver::dictionary::get_or_build_index;
///
/// let index = get_or_build_index();
/// assert!(index.contains_str("SIREN"));
/// ```
pub fn get_or_build_index() -> Arc<Trie> {
    if let Some(trie) = INDEX.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Arc::clone(trie);
    }

    let mut guard = INDEX.write().unwrap_or_else(PoisonError::into_inner);
    let trie = guard.get_or_insert_with(|| {
        let trie = Trie::from_words(WORDS);
        info!("Built dictionary index with {} words", trie.len());
        Arc::new(trie)
    });
    Arc::clone(trie)
}

/// Replace the shared index with a custom dictionary
pub fn install_index(trie: Trie) -> Arc<Trie> {
    info!("Installed dictionary index with {} words", trie.len());
    let trie = Arc::new(trie);
    *INDEX.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&trie));
    trie
}

/// Drop the shared index; the next access rebuilds it
pub fn reset_index() {
    *INDEX.write().unwrap_or_else(PoisonError::into_inner) = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: rustc_hash::FxHashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_words_include_classic_grid() {
        for word in ["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"] {
            assert!(WORDS.contains(&word), "missing {word}");
        }
    }

    #[test]
    fn shared_index_covers_embedded_words() {
        // Only reads the index; other tests may have built it already
        let index = get_or_build_index();
        assert_eq!(index.len(), WORDS_COUNT);
        assert!(Arc::ptr_eq(&index, &get_or_build_index()));
    }
}
