//! Dictionary loading utilities
//!
//! Dictionary files hold one word per line, no header, any case.

use super::{LONG, SHORT};
use crate::core::Word;
use crate::matcher::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file in file order
///
/// Blank lines and lines with inner whitespace are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use crossword_maker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/long.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| Word::new(line).ok())
        .collect();

    Ok(words)
}

/// Load a dictionary file, degrading to an empty dictionary if it cannot be read
///
/// A missing or unreadable file is logged; searches against the result simply find
/// nothing.
#[must_use]
pub fn load_dictionary_or_empty<P: AsRef<Path>>(path: P) -> Dictionary {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(words) => {
            if words.is_empty() {
                log::warn!("Dictionary {} contains no words", path.display());
            } else {
                log::debug!("Loaded {} words from {}", words.len(), path.display());
            }
            Dictionary::new(words)
        }
        Err(e) => {
            log::warn!("Could not read dictionary {}: {e}", path.display());
            Dictionary::empty()
        }
    }
}

/// Dictionary named by a `--wordlist` value
///
/// - "short": embedded common words
/// - "long": embedded extended list
/// - anything else: a file path, read with [`load_dictionary_or_empty`]
///
/// # Examples
/// ```
/// use crossword_maker::wordlists::loader::load_wordlist;
/// use crossword_maker::wordlists::LONG_COUNT;
///
/// assert_eq!(load_wordlist("long").len(), LONG_COUNT);
/// assert!(load_wordlist("/no/such/wordlist.txt").is_empty());
/// ```
#[must_use]
pub fn load_wordlist(mode: &str) -> Dictionary {
    match mode {
        "short" => Dictionary::new(words_from_slice(SHORT)),
        "long" => Dictionary::new(words_from_slice(LONG)),
        path => load_dictionary_or_empty(path),
    }
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use crossword_maker::wordlists::loader::words_from_slice;
/// use crossword_maker::wordlists::SHORT;
///
/// let words = words_from_slice(SHORT);
/// assert_eq!(words.len(), SHORT.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
