//! Slot suggestion command
//!
//! Reads the current letters of one slot and lists the dictionary words that fit.

use crate::core::{Direction, GridError, PuzzleDocument};
use crate::matcher::{Dictionary, find_alternating, find_matches};

/// Which slot to fill and how to filter candidates
pub struct SuggestConfig {
    pub number: u32,
    pub direction: Direction,
    pub alternating: bool,
    pub limit: Option<usize>,
}

/// Candidates for one slot
pub struct SuggestResult {
    pub number: u32,
    pub direction: Direction,
    pub pattern: String,
    pub candidates: Vec<String>,
    pub total: usize,
}

/// Find words for a slot of `doc`
///
/// # Errors
///
/// Returns `GridError::UnknownSlot` if the number does not start a slot in that direction.
pub fn suggest_words(
    doc: &PuzzleDocument,
    dictionary: &Dictionary,
    config: &SuggestConfig,
) -> Result<SuggestResult, GridError> {
    let pattern = doc
        .grid()
        .slot_pattern(config.number, config.direction)
        .ok_or(GridError::UnknownSlot {
            number: config.number,
            direction: config.direction,
        })?;

    let found: Vec<String> = if config.alternating {
        find_alternating(dictionary, &pattern)
            .map(|word| word.text().to_string())
            .collect()
    } else {
        find_matches(dictionary, &pattern)
            .map(|word| word.text().to_string())
            .collect()
    };
    let total = found.len();
    let candidates = match config.limit {
        Some(limit) => found.into_iter().take(limit).collect(),
        None => found,
    };

    Ok(SuggestResult {
        number: config.number,
        direction: config.direction,
        pattern,
        candidates,
        total,
    })
}
