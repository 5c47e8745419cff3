//! Dictionary trie with positional constraint search
//!
//! Words are stored in a 26-ary trie kept in a flat node arena. A search walks
//! the trie depth first: an exact constraint follows a single child, every
//! other constraint fans out over the children. Whole-word requirements
//! (must contain, must not contain) are checked once a full word is reached.

use crate::core::{Color, Tile, WORD_LENGTH, Word};
use log::debug;
use rustc_hash::FxHashSet;

/// A requirement on one letter position of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The letter must be at this position
    Exact(u8),
    /// The letter is not at this position but appears elsewhere in the word
    Misplaced(u8),
    /// The letter appears nowhere in the word
    Absent(u8),
    /// The letter is not at this position; nothing is said about the rest
    NotHere(u8),
}

impl Constraint {
    /// Constraint implied by a coloured tile within a single word
    #[must_use]
    pub const fn from_tile(tile: Tile) -> Self {
        match tile.color {
            Color::Green => Self::Exact(tile.letter),
            Color::Yellow => Self::Misplaced(tile.letter),
            Color::Grey => Self::Absent(tile.letter),
        }
    }

    /// Whether a letter may take this position during descent
    #[inline]
    const fn admits(self, letter: u8) -> bool {
        match self {
            Self::Exact(required) => letter == required,
            Self::Misplaced(excluded) | Self::Absent(excluded) | Self::NotHere(excluded) => {
                letter != excluded
            }
        }
    }

    /// Whole-word check applied once a complete word is found
    #[inline]
    fn holds_for(self, word: &Word) -> bool {
        match self {
            Self::Misplaced(letter) => word.has_letter(letter),
            Self::Absent(letter) => !word.has_letter(letter),
            Self::Exact(_) | Self::NotHere(_) => true,
        }
    }
}

const ALPHABET: usize = 26;
const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<u32>; ALPHABET],
    word: Option<Word>,
}

/// Dictionary index over five-letter words
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
const fn slot(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    /// Build a trie from raw strings
    ///
    /// Input is uppercased. Entries that are not five ASCII letters are skipped.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::dictionary::Trie;
    ///
    /// let trie = Trie::from_words(["siren", "ROBIN", "toolong", "robin"]);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        let mut skipped = 0usize;

        for text in words {
            match Word::new(text.as_ref().trim()) {
                Ok(word) => trie.insert(word),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {skipped} dictionary entries that are not five-letter words");
        }

        trie
    }

    /// Insert a word; inserting it again has no effect
    pub fn insert(&mut self, word: Word) {
        let mut node = ROOT;

        for &letter in word.chars() {
            let Some(index) = slot(letter) else {
                return;
            };
            node = match self.nodes[node].children[index] {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children[index] = Some(child as u32);
                    child
                }
            };
        }

        if self.nodes[node].word.replace(word).is_none() {
            self.len += 1;
        }
    }

    /// Number of distinct words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the dictionary holds this word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        let mut node = ROOT;
        for &letter in word.chars() {
            match slot(letter).and_then(|index| self.nodes[node].children[index]) {
                Some(child) => node = child as usize,
                None => return false,
            }
        }
        self.nodes[node].word.is_some()
    }

    /// Whether the dictionary holds this text, in any case
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Words satisfying all five positional constraints
    ///
    /// Returns an empty set when nothing matches.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::dictionary::{Constraint, Trie};
    ///
    /// let trie = Trie::from_words(["SIREN", "SIRES", "RISEN"]);
    /// let found = trie.search(&[
    ///     Constraint::Exact(b'S'),
    ///     Constraint::Exact(b'I'),
    ///     Constraint::Exact(b'R'),
    ///     Constraint::Exact(b'E'),
    ///     Constraint::NotHere(b'S'),
    /// ]);
    /// assert_eq!(found.len(), 1);
    /// ```
    #[must_use]
    pub fn search(&self, constraints: &[Constraint; WORD_LENGTH]) -> FxHashSet<Word> {
        let mut results = FxHashSet::default();
        self.descend(ROOT, 0, constraints, &mut results);
        results
    }

    /// Words consistent with the colours of a single word's tiles
    ///
    /// Green fixes the letter, Yellow requires it elsewhere in the word and
    /// Grey excludes it from the whole word.
    #[must_use]
    pub fn search_word(&self, tiles: &[Tile; WORD_LENGTH]) -> FxHashSet<Word> {
        self.search(&tiles.map(Constraint::from_tile))
    }

    fn descend(
        &self,
        node: usize,
        depth: usize,
        constraints: &[Constraint; WORD_LENGTH],
        results: &mut FxHashSet<Word>,
    ) {
        if depth == WORD_LENGTH {
            if let Some(word) = self.nodes[node].word
                && constraints.iter().all(|c| c.holds_for(&word))
            {
                results.insert(word);
            }
            return;
        }

        let constraint = constraints[depth];
        if let Constraint::Exact(letter) = constraint {
            if let Some(child) = slot(letter).and_then(|index| self.nodes[node].children[index]) {
                self.descend(child as usize, depth + 1, constraints, results);
            }
            return;
        }

        for (index, child) in self.nodes[node].children.iter().enumerate() {
            let letter = b'A' + index as u8;
            if let Some(child) = child
                && constraint.admits(letter)
            {
                self.descend(*child as usize, depth + 1, constraints, results);
            }
        }
    }

    /// All words in alphabetical order
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.len);
        self.collect(ROOT, &mut words);
        words
    }

    fn collect(&self, node: usize, out: &mut Vec<Word>) {
        if let Some(word) = self.nodes[node].word {
            out.push(word);
        }
        for child in self.nodes[node].children.iter().flatten() {
            self.collect(*child as usize, out);
        }
    }

    /// Words beginning with a letter, alphabetically
    #[must_use]
    pub fn words_starting_with(&self, letter: u8) -> Vec<Word> {
        let mut words = Vec::new();
        if let Some(child) = slot(letter.to_ascii_uppercase()).and_then(|i| self.nodes[ROOT].children[i]) {
            self.collect(child as usize, &mut words);
        }
        words
    }

    /// Words containing a letter anywhere, alphabetically
    #[must_use]
    pub fn words_containing(&self, letter: u8) -> Vec<Word> {
        let letter = letter.to_ascii_uppercase();
        self.words()
            .into_iter()
            .filter(|word| word.has_letter(letter))
            .collect()
    }
}
