//! Word list loading
//!
//! Custom dictionaries are plain text with one word per line. Blank lines and
//! `#` comments are ignored; anything that is not five letters is dropped.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a word list, keeping the first occurrence of each word
///
/// # Examples
/// ```
/// use waffle_solver::dictionary::loader::parse_words;
///
/// let words = parse_words("# grid words\nsiren\nRABBI\nsiren\nwinches\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["SIREN", "RABBI"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;
    let mut words = Vec::new();

    for entry in content.lines().map(str::trim) {
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        match Word::new(entry) {
            Ok(word) => {
                if seen.insert(word) {
                    words.push(word);
                }
            }
            Err(e) => {
                skipped += 1;
                debug!("Skipping word list entry {entry:?}: {e}");
            }
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} invalid word list entries");
    }
    words
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use waffle_solver::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    fs::read_to_string(path).map(|content| parse_words(&content))
}

/// Words from a static list, dropping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|entry| entry.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WORDS;
    use std::io::Write;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn parse_ignores_comments_and_blanks() {
        let words = parse_words("# across\nsiren\n\n   # down\n  screw  \n");
        assert_eq!(texts(&words), ["SIREN", "SCREW"]);
    }

    #[test]
    fn parse_drops_duplicates_and_bad_entries() {
        let words = parse_words("robin\nROBIN\nrob1n\nneighs\nneigh");
        assert_eq!(texts(&words), ["ROBIN", "NEIGH"]);
    }

    #[test]
    fn slice_conversion_keeps_order() {
        let words = words_from_slice(&["winch", "toolong", "RABBI", "abc"]);
        assert_eq!(texts(&words), ["WINCH", "RABBI"]);
        assert_eq!(words_from_slice(WORDS).len(), WORDS.len());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("waffle_words_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "siren\n\n  neigh  \nbad\nscrew").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(texts(&words), ["SIREN", "NEIGH", "SCREW"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
