//! Puzzle documents: a grid, its clues and a difficulty-based name

use super::cell::{Direction, Position};
use super::clue::{ClueList, single_line};
use super::grid::{Grid, GridError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Difficulty label derived from the share of open cells
///
/// More open cells make a grid harder to fill: at least 85% open is `Hard`,
/// at least 82% is `Medium`, anything else `Easy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Classify a grid from its blocked-cell count
    ///
    /// Thresholds are compared in integer percent so boundary counts land exactly.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::classify(15, 100), Difficulty::Hard);
    /// assert_eq!(Difficulty::classify(18, 100), Difficulty::Medium);
    /// assert_eq!(Difficulty::classify(25, 100), Difficulty::Easy);
    /// ```
    #[must_use]
    pub const fn classify(filled: usize, cells: usize) -> Self {
        if cells == 0 {
            return Self::Easy;
        }
        let open = cells.saturating_sub(filled);
        if open * 100 >= 85 * cells {
            Self::Hard
        } else if open * 100 >= 82 * cells {
            Self::Medium
        } else {
            Self::Easy
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// Automatic name for a grid, e.g. `"15 x 15 (Medium)"`
#[must_use]
pub fn template_name(width: usize, height: usize, filled: usize) -> String {
    let difficulty = Difficulty::classify(filled, width * height);
    format!("{width} x {height} ({difficulty})")
}

/// A crossword in progress: layout, letters and clue descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDocument {
    name: String,
    grid: Grid,
    clues: ClueList,
}

impl PuzzleDocument {
    /// Assemble a document from parts; clues must match `ClueList::derive(&grid)` in shape
    ///
    /// Line breaks in the name become spaces.
    #[must_use]
    pub fn new(name: impl Into<String>, grid: Grid, clues: ClueList) -> Self {
        Self {
            name: single_line(name.into()),
            grid,
            clues,
        }
    }

    /// A fresh all-open document with an automatic name
    ///
    /// # Errors
    /// Returns `GridError::SizeOutOfBounds` if either dimension is outside `[3, 20]`.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::PuzzleDocument;
    ///
    /// let doc = PuzzleDocument::blank(15, 15).unwrap();
    /// assert_eq!(doc.name(), "15 x 15 (Hard)");
    /// assert_eq!(doc.filled_count(), 0);
    /// ```
    pub fn blank(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    /// Wrap a grid with derived empty clues and an automatic name
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let clues = ClueList::derive(&grid);
        let name = template_name(grid.width(), grid.height(), grid.filled_count());
        Self { name, grid, clues }
    }

    /// Start a puzzle from a template: same layout and name, no letters, empty clues
    #[must_use]
    pub fn from_template(template: &Self) -> Self {
        let mut grid = template.grid.clone();
        grid.clear_letters();

        Self {
            name: template.name.clone(),
            clues: ClueList::derive(&grid),
            grid,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the document; line breaks become spaces
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = single_line(name.into());
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &ClueList {
        &self.clues
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of blocked cells
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.grid.filled_count()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::classify(self.filled_count(), self.width() * self.height())
    }

    /// Replace the name with the automatic size-and-difficulty label
    pub fn refresh_name(&mut self) {
        self.name = template_name(self.width(), self.height(), self.filled_count());
    }

    /// Toggle a cell and its symmetric partner, then renumber, re-derive clues and rename
    ///
    /// Clue descriptions follow their slot's start cell; slots that no longer exist
    /// lose their text.
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` without mutating if `pos` is outside the grid.
    pub fn toggle_blocked(&mut self, pos: Position) -> Result<i32, GridError> {
        let texts = self.texts_by_start();
        let delta = self.grid.toggle_blocked(pos)?;
        self.clues = self.derive_with_texts(&texts);
        self.refresh_name();
        Ok(delta)
    }

    /// Rebuild numbers and clue lists from the current layout
    pub fn renumber(&mut self) {
        let texts = self.texts_by_start();
        self.grid.renumber();
        self.clues = self.derive_with_texts(&texts);
    }

    /// Write one letter; see [`Grid::fill_letter`]
    ///
    /// # Errors
    /// Propagates the grid error; nothing changes on failure.
    pub fn fill_letter(&mut self, pos: Position, letter: char) -> Result<(), GridError> {
        self.grid.fill_letter(pos, letter)
    }

    /// Write an accepted word into a slot; see [`Grid::fill_word`]
    ///
    /// # Errors
    /// Propagates the grid error; nothing changes on failure.
    pub fn fill_word(
        &mut self,
        number: u32,
        direction: Direction,
        word: &str,
    ) -> Result<(), GridError> {
        self.grid.fill_word(number, direction, word)
    }

    /// Set a clue description; returns `false` if the slot does not exist
    pub fn set_clue_text(&mut self, direction: Direction, number: u32, text: &str) -> bool {
        self.clues.set_text(direction, number, text.trim())
    }

    fn texts_by_start(&self) -> FxHashMap<(Direction, Position), String> {
        let mut texts = FxHashMap::default();
        for direction in [Direction::Across, Direction::Down] {
            for clue in self.clues.get(direction) {
                if clue.text.is_empty() {
                    continue;
                }
                if let Some(pos) = self.grid.position_of(clue.number) {
                    texts.insert((direction, pos), clue.text.clone());
                }
            }
        }
        texts
    }

    fn derive_with_texts(&self, texts: &FxHashMap<(Direction, Position), String>) -> ClueList {
        let mut clues = ClueList::derive(&self.grid);
        for direction in [Direction::Across, Direction::Down] {
            let numbers = clues.numbers(direction);
            for number in numbers {
                let text = self
                    .grid
                    .position_of(number)
                    .and_then(|pos| texts.get(&(direction, pos)));
                if let Some(text) = text {
                    clues.set_text(direction, number, text.as_str());
                }
            }
        }
        clues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_thresholds() {
        assert_eq!(Difficulty::classify(15, 100), Difficulty::Hard);
        assert_eq!(Difficulty::classify(16, 100), Difficulty::Medium);
        assert_eq!(Difficulty::classify(18, 100), Difficulty::Medium);
        assert_eq!(Difficulty::classify(19, 100), Difficulty::Easy);
        assert_eq!(Difficulty::classify(25, 100), Difficulty::Easy);
        assert_eq!(Difficulty::classify(0, 9), Difficulty::Hard);
    }

    #[test]
    fn template_names() {
        assert_eq!(template_name(10, 10, 15), "10 x 10 (Hard)");
        assert_eq!(template_name(10, 10, 18), "10 x 10 (Medium)");
        assert_eq!(template_name(10, 10, 25), "10 x 10 (Easy)");
    }

    #[test]
    fn blank_document() {
        let doc = PuzzleDocument::blank(5, 4).unwrap();
        assert_eq!(doc.name(), "5 x 4 (Hard)");
        assert_eq!(doc.clues().across.len(), 4);
        assert_eq!(doc.clues().down.len(), 5);
        assert!(PuzzleDocument::blank(21, 5).is_err());
    }

    #[test]
    fn toggle_updates_name_and_clues() {
        let mut doc = PuzzleDocument::blank(3, 3).unwrap();
        assert_eq!(doc.toggle_blocked(Position::new(1, 1)).unwrap(), 1);
        // 8 of 9 open is still Hard
        assert_eq!(doc.name(), "3 x 3 (Hard)");

        doc.toggle_blocked(Position::new(0, 0)).unwrap();
        assert_eq!(doc.filled_count(), 3);
        assert_eq!(doc.difficulty(), Difficulty::Easy);
        assert_eq!(doc.name(), "3 x 3 (Easy)");
        assert_eq!(doc.clues(), &ClueList::derive(doc.grid()));
    }

    #[test]
    fn toggle_keeps_text_of_surviving_slots() {
        let mut doc = PuzzleDocument::blank(5, 5).unwrap();
        assert!(doc.set_clue_text(Direction::Across, 1, " Top row "));
        assert!(doc.set_clue_text(Direction::Down, 3, "Middle column"));

        // Blocks (0, 2) and (4, 2): down 3 no longer starts at (0, 2)
        doc.toggle_blocked(Position::new(0, 2)).unwrap();

        assert_eq!(doc.clues().across[0].text, "Top row");
        assert!(doc.clues().down.iter().all(|clue| clue.text.is_empty()));
    }

    #[test]
    fn names_and_clues_are_single_line() {
        let mut doc = PuzzleDocument::blank(3, 3).unwrap();
        doc.set_name("My\r\npuzzle");
        assert_eq!(doc.name(), "My  puzzle");

        assert!(doc.set_clue_text(Direction::Across, 1, "line one\n2. injected"));
        assert_eq!(doc.clues().across[0].text, "line one 2. injected");
    }

    #[test]
    fn from_template_clears_letters() {
        let mut template = PuzzleDocument::blank(4, 4).unwrap();
        template.toggle_blocked(Position::new(0, 0)).unwrap();
        template.fill_word(1, Direction::Across, "ace").unwrap();
        template.set_clue_text(Direction::Across, 1, "Top card");

        let doc = PuzzleDocument::from_template(&template);
        assert_eq!(doc.name(), template.name());
        assert_eq!(doc.filled_count(), 2);
        assert!(doc.grid().cells().iter().all(|cell| cell.letter().is_none()));
        assert!(doc.clues().across.iter().all(|clue| clue.text.is_empty()));
    }
}
