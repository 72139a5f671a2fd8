//! Pattern search command
//!
//! Runs a pattern against one dictionary and collects the matching words.

use crate::core::Pattern;
use crate::matcher::{Dictionary, find_alternating, find_matches, par_find_matches};

/// Configuration for a pattern search
pub struct FindConfig {
    pub pattern: String,
    pub alternating: bool,
    pub parallel: bool,
    pub limit: Option<usize>,
}

impl FindConfig {
    #[must_use]
    pub const fn new(pattern: String) -> Self {
        Self {
            pattern,
            alternating: false,
            parallel: false,
            limit: None,
        }
    }
}

/// Result of a pattern search
pub struct FindResult {
    pub pattern: String,
    pub words: Vec<String>,
    /// Matches before `limit` was applied
    pub total: usize,
    pub dictionary_size: usize,
}

/// Search `dictionary` for the words matching `config.pattern`
///
/// # Examples
/// ```
/// use crossword_maker::commands::{FindConfig, run_find};
/// use crossword_maker::matcher::Dictionary;
///
/// let dictionary = Dictionary::from_lines(["CRANE", "CRATE", "CRAZE"]);
/// let result = run_find(&dictionary, &FindConfig::new("cr@te".to_string()));
/// assert_eq!(result.words, vec!["CRATE"]);
/// ```
#[must_use]
pub fn run_find(dictionary: &Dictionary, config: &FindConfig) -> FindResult {
    let pattern = Pattern::parse(&config.pattern);

    let found: Vec<String> = if config.parallel {
        par_find_matches(dictionary, &config.pattern, config.alternating)
            .into_iter()
            .map(|word| word.text().to_string())
            .collect()
    } else if config.alternating {
        find_alternating(dictionary, &config.pattern)
            .map(|word| word.text().to_string())
            .collect()
    } else {
        find_matches(dictionary, &config.pattern)
            .map(|word| word.text().to_string())
            .collect()
    };

    let total = found.len();
    let words = match config.limit {
        Some(limit) => found.into_iter().take(limit).collect(),
        None => found,
    };

    FindResult {
        pattern: pattern.to_string(),
        words,
        total,
        dictionary_size: dictionary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["CRANE", "CRATE", "CRAZE", "BANAL", "PAPER"])
    }

    #[test]
    fn plain_search() {
        let result = run_find(&dictionary(), &FindConfig::new("cra__".to_string()));
        assert_eq!(result.words, vec!["CRANE", "CRATE", "CRAZE"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.dictionary_size, 5);
    }

    #[test]
    fn limit_keeps_total() {
        let mut config = FindConfig::new("_____".to_string());
        config.limit = Some(2);
        let result = run_find(&dictionary(), &config);
        assert_eq!(result.words, vec!["CRANE", "CRATE"]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn parallel_and_alternating() {
        let mut config = FindConfig::new(" _____ ".to_string());
        config.alternating = true;
        let sequential = run_find(&dictionary(), &config);

        config.parallel = true;
        let parallel = run_find(&dictionary(), &config);

        assert_eq!(sequential.words, vec!["BANAL", "PAPER"]);
        assert_eq!(parallel.words, sequential.words);
        assert_eq!(parallel.pattern, "_____");
    }
}
