//! The process-wide dictionary index: build, replace and rebuild

use waffle_solver::core::Word;
use waffle_solver::dictionary::{
    Trie, WORDS, get_or_build_index, install_index, loader::words_from_slice, reset_index,
};

// One test only: the index is process-wide state
#[test]
fn index_builds_installs_and_resets() {
    let embedded = get_or_build_index();
    assert_eq!(embedded.len(), words_from_slice(WORDS).len());
    assert!(embedded.contains_str("SIREN"));

    // Repeated access shares the same index
    let again = get_or_build_index();
    assert!(std::sync::Arc::ptr_eq(&embedded, &again));

    let installed = install_index(Trie::from_words(["SIREN", "RABBI", "WINCH"]));
    let current = get_or_build_index();
    assert!(std::sync::Arc::ptr_eq(&installed, &current));
    assert_eq!(current.len(), 3);
    assert!(!current.contains_str("SCREW"));

    reset_index();
    let rebuilt = get_or_build_index();
    assert!(!std::sync::Arc::ptr_eq(&embedded, &rebuilt));
    assert_eq!(rebuilt.len(), embedded.len());
    assert!(rebuilt.contains(&Word::new("screw").unwrap()));
}
