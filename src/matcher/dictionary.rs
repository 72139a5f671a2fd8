//! Read-only dictionaries bucketed by word length

use crate::core::Word;
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{LONG, SHORT};
use rustc_hash::FxHashMap;

/// An immutable word list in file order
///
/// Words are grouped by character length so a search only visits entries that can
/// fit the slot. Each bucket keeps dictionary order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary from words in file order
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::Word;
    /// use crossword_maker::matcher::Dictionary;
    ///
    /// let words = ["CRANE", "CAT", "CRATE"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words.to_vec());
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.with_length(5).count(), 2);
    /// ```
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (idx, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(idx);
        }

        Self { words, by_length }
    }

    /// Build a dictionary from raw lines, skipping blank ones
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(
            lines
                .into_iter()
                .filter_map(|line| Word::new(line).ok())
                .collect(),
        )
    }

    /// A dictionary with no words; every search on it is empty
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in file order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Indices into [`Dictionary::words`] of words with `len` characters, in file order
    #[must_use]
    pub fn bucket(&self, len: usize) -> &[usize] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Words with `len` characters, in file order
    pub fn with_length(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.bucket(len).iter().map(move |&idx| &self.words[idx])
    }
}

/// The two dictionaries a session searches: common words and the extended list
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    short: Dictionary,
    long: Dictionary,
}

impl DictionaryIndex {
    #[must_use]
    pub const fn new(short: Dictionary, long: Dictionary) -> Self {
        Self { short, long }
    }

    /// Both dictionaries from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let index = Self::new(
            Dictionary::new(words_from_slice(SHORT)),
            Dictionary::new(words_from_slice(LONG)),
        );
        log::debug!(
            "Loaded embedded dictionaries: {} short, {} long",
            index.short.len(),
            index.long.len()
        );
        index
    }

    #[inline]
    #[must_use]
    pub const fn short(&self) -> &Dictionary {
        &self.short
    }

    #[inline]
    #[must_use]
    pub const fn long(&self) -> &Dictionary {
        &self.long
    }

    /// The dictionary to search: the long list when `use_long` is set
    #[inline]
    #[must_use]
    pub const fn select(&self, use_long: bool) -> &Dictionary {
        if use_long { &self.long } else { &self.short }
    }
}
