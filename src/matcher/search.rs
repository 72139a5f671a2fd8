//! Pattern search over a dictionary
//!
//! Searches are plain scans of one length bucket. The lazy variants borrow the
//! dictionary and yield in file order; the parallel variant shards the bucket
//! across rayon workers and also returns file order.

use super::dictionary::Dictionary;
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use std::slice;

/// Lazy iterator over the words matching a pattern
///
/// Created by [`find_matches`]. Each call starts a fresh scan.
pub struct Matches<'a> {
    pattern: Pattern,
    words: &'a [Word],
    indices: slice::Iter<'a, usize>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Word;

    fn next(&mut self) -> Option<Self::Item> {
        let words = self.words;
        let pattern = &self.pattern;
        self.indices.find_map(|&idx| {
            let word = &words[idx];
            pattern.matches(word).then_some(word)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.indices.size_hint().1)
    }
}

/// Words whose length equals the pattern's and that satisfy every position
///
/// An empty pattern yields nothing.
///
/// # Examples
/// ```
/// use crossword_maker::matcher::{Dictionary, find_matches};
///
/// let dictionary = Dictionary::from_lines(["CRANE", "CRATE", "CRAZE"]);
/// let found: Vec<&str> = find_matches(&dictionary, "cr_ze").map(|w| w.text()).collect();
/// assert_eq!(found, vec!["CRAZE"]);
/// ```
#[must_use]
pub fn find_matches<'a>(dictionary: &'a Dictionary, pattern: &str) -> Matches<'a> {
    let pattern = Pattern::parse(pattern);
    let bucket: &'a [usize] = if pattern.is_empty() {
        &[]
    } else {
        dictionary.bucket(pattern.len())
    };

    Matches {
        pattern,
        words: dictionary.words(),
        indices: bucket.iter(),
    }
}

/// Matches of `pattern` whose vowels and consonants strictly alternate
///
/// # Examples
/// ```
/// use crossword_maker::matcher::{Dictionary, find_alternating};
///
/// let dictionary = Dictionary::from_lines(["CRANE", "BANAL", "PAPER"]);
/// let found: Vec<&str> = find_alternating(&dictionary, "_____").map(|w| w.text()).collect();
/// assert_eq!(found, vec!["BANAL", "PAPER"]);
/// ```
pub fn find_alternating<'a>(
    dictionary: &'a Dictionary,
    pattern: &str,
) -> impl Iterator<Item = &'a Word> + 'a {
    find_matches(dictionary, pattern).filter(|word| word.alternates())
}

/// Parallel scan of the pattern's length bucket, results in file order
///
/// Produces the same words as [`find_matches`] (or [`find_alternating`] when
/// `alternating` is set), computed across the rayon thread pool.
#[must_use]
pub fn par_find_matches<'a>(
    dictionary: &'a Dictionary,
    pattern: &str,
    alternating: bool,
) -> Vec<&'a Word> {
    let pattern = Pattern::parse(pattern);
    if pattern.is_empty() {
        return Vec::new();
    }

    let words = dictionary.words();
    let bucket = dictionary.bucket(pattern.len());

    let found: Vec<&Word> = bucket
        .par_iter()
        .map(move |&idx| &words[idx])
        .filter(|word| pattern.matches(word) && (!alternating || word.alternates()))
        .collect();

    log::debug!(
        "Parallel scan for '{pattern}': {} of {} candidates matched",
        found.len(),
        bucket.len()
    );

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
        words.into_iter().map(Word::text).collect()
    }

    fn cranes() -> Dictionary {
        Dictionary::from_lines(["CRANE", "CRATE", "CRAZE"])
    }

    #[test]
    fn literal_wildcard_pattern() {
        let dictionary = cranes();
        assert_eq!(texts(find_matches(&dictionary, "cr_ze")), vec!["CRAZE"]);
    }

    #[test]
    fn vowel_pattern() {
        let dictionary = cranes();
        assert_eq!(texts(find_matches(&dictionary, "cr@te")), vec!["CRATE"]);
    }

    #[test]
    fn consonant_pattern() {
        let dictionary = cranes();
        assert_eq!(texts(find_matches(&dictionary, "#r_ne")), vec!["CRANE"]);
    }

    #[test]
    fn results_follow_file_order() {
        let dictionary = Dictionary::from_lines(["zebra", "apple", "mango", "berry"]);
        assert_eq!(
            texts(find_matches(&dictionary, "_____")),
            vec!["zebra", "apple", "mango", "berry"]
        );
    }

    #[test]
    fn only_same_length_words() {
        let dictionary = Dictionary::from_lines(["cat", "cart", "carts", "cot"]);
        assert_eq!(texts(find_matches(&dictionary, "c_t")), vec!["cat", "cot"]);
    }

    #[test]
    fn empty_pattern_or_dictionary_yields_nothing() {
        let dictionary = cranes();
        assert_eq!(find_matches(&dictionary, "").count(), 0);
        assert_eq!(find_matches(&Dictionary::empty(), "cr_ne").count(), 0);
        assert!(par_find_matches(&dictionary, "  ", false).is_empty());
    }

    #[test]
    fn search_is_restartable() {
        let dictionary = cranes();
        let first = texts(find_matches(&dictionary, "cra__"));
        let second = texts(find_matches(&dictionary, "cra__"));
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn alternating_filter() {
        let dictionary = Dictionary::from_lines(["CRANE", "ALERT", "BANAL", "ALIBI", "PAPER"]);
        assert_eq!(
            texts(find_alternating(&dictionary, "_____")),
            vec!["BANAL", "ALIBI", "PAPER"]
        );
        assert_eq!(texts(find_alternating(&dictionary, "a____")), vec!["ALIBI"]);
    }

    #[test]
    fn parallel_scan_matches_sequential() {
        let index = crate::matcher::DictionaryIndex::embedded();
        for use_long in [false, true] {
            let dictionary = index.select(use_long);
            for pattern in ["_____", "c____", "#@#@#", "___e", "@"] {
                let sequential = texts(find_matches(dictionary, pattern));
                let parallel = texts(par_find_matches(dictionary, pattern, false));
                assert_eq!(sequential, parallel, "pattern {pattern}");

                let sequential = texts(find_alternating(dictionary, pattern));
                let parallel = texts(par_find_matches(dictionary, pattern, true));
                assert_eq!(sequential, parallel, "alternating {pattern}");
            }
        }
    }
}
