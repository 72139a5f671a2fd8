//! Slot search patterns
//!
//! A pattern constrains each position of a candidate word:
//! - a letter matches that letter, ignoring case
//! - `_` matches any character
//! - `@` matches a vowel (`AEIOU`)
//! - `#` matches a consonant (any other ASCII letter)

use super::word::{Word, is_consonant, is_vowel};
use std::fmt;

/// Wildcard for any character
pub const ANY: char = '_';
/// Wildcard for a vowel
pub const VOWEL: char = '@';
/// Wildcard for a consonant
pub const CONSONANT: char = '#';

/// Constraint on a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Any,
    Vowel,
    Consonant,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c {
            ANY => Self::Any,
            VOWEL => Self::Vowel,
            CONSONANT => Self::Consonant,
            c => Self::Literal(c.to_ascii_lowercase()),
        }
    }

    /// Whether a lowercase letter satisfies this constraint
    #[inline]
    #[must_use]
    pub fn accepts(self, letter: char) -> bool {
        match self {
            Self::Literal(expected) => expected == letter,
            Self::Any => true,
            Self::Vowel => is_vowel(letter),
            Self::Consonant => is_consonant(letter),
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Literal(c) => c,
            Self::Any => ANY,
            Self::Vowel => VOWEL,
            Self::Consonant => CONSONANT,
        }
    }
}

/// A parsed search pattern
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Parse pattern text; surrounding whitespace is ignored
    ///
    /// Every character is meaningful, so parsing cannot fail. An empty pattern
    /// matches nothing.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("cr@te");
    /// assert!(pattern.matches(&Word::new("CRATE").unwrap()));
    /// assert!(!pattern.matches(&Word::new("CRANE").unwrap()));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: text.trim().chars().map(Token::from_char).collect(),
        }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether every position is a plain `_` wildcard
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.tokens.iter().all(|&t| t == Token::Any)
    }

    /// Whether `word` has the same length and satisfies every position
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        !self.is_empty()
            && word.len() == self.len()
            && self
                .tokens
                .iter()
                .zip(word.letters())
                .all(|(token, &letter)| token.accepts(letter))
    }
}

impl std::str::FromStr for Pattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.as_char())?;
        }
        Ok(())
    }
}
