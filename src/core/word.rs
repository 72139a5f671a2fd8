//! Dictionary word representation
//!
//! A Word keeps the dictionary text as written plus a lowercase character copy
//! used for pattern comparison.

use std::fmt;

const VOWELS: &str = "aeiou";

/// Whether a character is one of `AEIOU`, either case
#[inline]
#[must_use]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c.to_ascii_lowercase())
}

/// Whether a character is an ASCII letter other than a vowel
#[inline]
#[must_use]
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// A dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

/// Error type for unusable dictionary lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a Word from one dictionary line
    ///
    /// Surrounding whitespace is trimmed; the original case is kept for display.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or contains inner whitespace.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "Crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let letters = trimmed.chars().map(|c| c.to_ascii_lowercase()).collect();

        Ok(Self {
            text: trimmed.to_string(),
            letters,
        })
    }

    /// The word as it appears in the dictionary
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase characters, one per cell
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Length in characters (cells), not bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether vowels and consonants strictly alternate along the word
    ///
    /// Every adjacent pair must hold exactly one vowel and one consonant.
    /// Single-letter words pass.
    #[must_use]
    pub fn alternates(&self) -> bool {
        self.letters.windows(2).all(|pair| {
            (is_vowel(pair[0]) && is_consonant(pair[1]))
                || (is_consonant(pair[0]) && is_vowel(pair[1]))
        })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_keeps_original_case() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_trims_line() {
        let word = Word::new("  slate\t").unwrap();
        assert_eq!(word.text(), "slate");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_rejects_blank_and_inner_space() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new(" \n"), Err(WordError::Empty)));
        assert!(matches!(
            Word::new("ice cream"),
            Err(WordError::ContainsWhitespace)
        ));
    }

    #[test]
    fn vowel_and_consonant_classes() {
        for c in ['a', 'E', 'i', 'O', 'u'] {
            assert!(is_vowel(c));
            assert!(!is_consonant(c));
        }
        for c in ['b', 'Y', 'z'] {
            assert!(is_consonant(c));
        }
        assert!(!is_vowel('-'));
        assert!(!is_consonant('-'));
    }

    #[test]
    fn alternation() {
        assert!(!Word::new("CRANE").unwrap().alternates());
        assert!(!Word::new("ALERT").unwrap().alternates());
        assert!(Word::new("BANANA").unwrap().alternates());
        assert!(Word::new("alibi").unwrap().alternates());
        assert!(Word::new("a").unwrap().alternates());
        assert!(!Word::new("ab-c").unwrap().alternates());
    }

    #[test]
    fn word_display() {
        let word = Word::new("Crane").unwrap();
        assert_eq!(format!("{word}"), "Crane");
    }
}
