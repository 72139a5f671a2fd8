//! Puzzle inspection command
//!
//! Reads a stored puzzle and summarizes its layout and progress.

use crate::codec::{CodecError, read_puzzle};
use crate::core::{Difficulty, PuzzleDocument};

/// Summary of a stored puzzle
pub struct PuzzleSummary {
    pub document: PuzzleDocument,
    pub difficulty: Difficulty,
    pub open_cells: usize,
    pub letters_placed: usize,
    pub clues_written: usize,
}

impl PuzzleSummary {
    #[must_use]
    pub fn new(document: PuzzleDocument) -> Self {
        let cells = document.grid().cells();
        let open_cells = cells.iter().filter(|cell| cell.is_open()).count();
        let letters_placed = cells.iter().filter(|cell| cell.letter().is_some()).count();

        let clues = document.clues();
        let clues_written = clues
            .across
            .iter()
            .chain(&clues.down)
            .filter(|clue| !clue.text.is_empty())
            .count();

        Self {
            difficulty: document.difficulty(),
            open_cells,
            letters_placed,
            clues_written,
            document,
        }
    }
}

/// Parse a full-form puzzle and summarize it
///
/// # Errors
///
/// Returns the codec error if the text is not a well-formed puzzle.
pub fn inspect_puzzle(text: &str) -> Result<PuzzleSummary, CodecError> {
    read_puzzle(text).map(PuzzleSummary::new)
}
