//! Crossword grid with clue numbering
//!
//! Cells live in a flat row-major store addressed by `row * width + col`.
//! Clue numbers are never edited directly: every change to the blocked layout
//! is followed by [`Grid::renumber`], which rebuilds them from the layout alone.

use super::cell::{Cell, Direction, EMPTY_LETTER, Position};
use std::fmt;

/// Smallest allowed width or height
pub const MIN_SIZE: usize = 3;
/// Largest allowed width or height
pub const MAX_SIZE: usize = 20;
/// Size offered for a fresh template when the caller has no preference
pub const DEFAULT_SIZE: usize = 15;

/// Errors raised by grid operations
///
/// Every failing operation leaves the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    SizeOutOfBounds { width: usize, height: usize },
    OutOfRange(Position),
    BlockedCell(Position),
    InvalidLetter(char),
    UnknownSlot { number: u32, direction: Direction },
    WordLength { expected: usize, actual: usize },
    CellCount { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfBounds { width, height } => write!(
                f,
                "Grid size {width} x {height} is outside {MIN_SIZE}..={MAX_SIZE}"
            ),
            Self::OutOfRange(pos) => write!(f, "Cell {pos} is outside the grid"),
            Self::BlockedCell(pos) => write!(f, "Cell {pos} is blocked"),
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a letter"),
            Self::UnknownSlot { number, direction } => {
                write!(f, "No {number} {direction} slot in this grid")
            }
            Self::WordLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::CellCount { expected, actual } => {
                write!(f, "Expected {expected} cells, got {actual}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Check a requested size against the allowed range
///
/// # Errors
/// Returns `GridError::SizeOutOfBounds` if either dimension is outside `[3, 20]`.
pub const fn check_size(width: usize, height: usize) -> Result<(), GridError> {
    if width < MIN_SIZE || width > MAX_SIZE || height < MIN_SIZE || height > MAX_SIZE {
        return Err(GridError::SizeOutOfBounds { width, height });
    }
    Ok(())
}

/// A rectangular crossword grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-open grid, numbered
    ///
    /// # Errors
    /// Returns `GridError::SizeOutOfBounds` if either dimension is outside `[3, 20]`.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::{Grid, Position};
    ///
    /// let grid = Grid::new(3, 3).unwrap();
    /// assert_eq!(grid.number_at(Position::new(0, 2)), Some(3));
    /// assert_eq!(grid.number_at(Position::new(1, 1)), None);
    ///
    /// assert!(Grid::new(2, 5).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::from_cells(width, height, vec![Cell::EMPTY; width * height])
    }

    /// Build a grid from row-major cells; numbers in `cells` are discarded and rebuilt
    ///
    /// # Errors
    /// Returns an error if the size is out of bounds or `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        check_size(width, height)?;
        if cells.len() != width * height {
            return Err(GridError::CellCount {
                expected: width * height,
                actual: cells.len(),
            });
        }

        let mut grid = Self {
            width,
            height,
            cells,
        };
        grid.renumber();
        Ok(grid)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells
    ///
    /// # Panics
    /// Panics if `row >= height`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.row * self.width + pos.col)
        } else {
            Err(GridError::OutOfRange(pos))
        }
    }

    /// The cell at `pos`, or `None` outside the grid
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).ok().map(|idx| self.cells[idx])
    }

    /// Whether `pos` is blocked; positions outside the grid count as blocked
    #[must_use]
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.get(pos).is_none_or(Cell::is_blocked)
    }

    /// Clue number at `pos`, `None` when blocked, unnumbered or out of range
    #[must_use]
    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.get(pos).and_then(Cell::number)
    }

    /// Number of blocked cells
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_blocked()).count()
    }

    /// Recompute every open cell's clue number from the blocked layout
    ///
    /// Cells are scanned in row-major order with a counter starting at 1. An open
    /// cell takes the next number when it sits on the top or left edge, or when the
    /// cell above or to its left is blocked. Other open cells get 0.
    pub fn renumber(&mut self) {
        let mut counter = 1;

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row * self.width + col;
                if self.cells[idx].is_blocked() {
                    continue;
                }

                let starts = row == 0
                    || col == 0
                    || self.cells[idx - self.width].is_blocked()
                    || self.cells[idx - 1].is_blocked();

                let number = if starts {
                    let next = counter;
                    counter += 1;
                    next
                } else {
                    0
                };

                if let Cell::Open { number: n, .. } = &mut self.cells[idx] {
                    *n = number;
                }
            }
        }

        log::debug!(
            "Renumbered {}x{} grid: {} clue numbers",
            self.width,
            self.height,
            counter - 1
        );
    }

    /// The cell that mirrors `pos` under 180° rotation
    #[must_use]
    pub const fn symmetric_partner(&self, pos: Position) -> Position {
        Position::new(self.height - 1 - pos.row, self.width - 1 - pos.col)
    }

    /// Flip the blocked state of `pos` and its rotational partner, then renumber
    ///
    /// Blocking a cell clears its letter. Returns the change in blocked-cell count:
    /// ±1 for the centre cell of an odd-by-odd grid, ±2 otherwise.
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` without mutating if `pos` is outside the grid.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::{Grid, Position};
    ///
    /// let mut grid = Grid::new(5, 5).unwrap();
    /// assert_eq!(grid.toggle_blocked(Position::new(0, 1)).unwrap(), 2);
    /// assert!(grid.is_blocked(Position::new(4, 3)));
    /// assert_eq!(grid.toggle_blocked(Position::new(2, 2)).unwrap(), 1);
    /// ```
    pub fn toggle_blocked(&mut self, pos: Position) -> Result<i32, GridError> {
        let idx = self.index(pos)?;
        let partner = self.index(self.symmetric_partner(pos))?;

        let next = if self.cells[idx].is_blocked() {
            Cell::EMPTY
        } else {
            Cell::Blocked
        };
        let cells_flipped = if idx == partner { 1 } else { 2 };

        self.cells[idx] = next;
        self.cells[partner] = next;
        self.renumber();

        Ok(if next.is_blocked() {
            cells_flipped
        } else {
            -cells_flipped
        })
    }

    /// Write a letter into an open cell; `'_'` clears it
    ///
    /// Letters are stored uppercase.
    ///
    /// # Errors
    /// Returns an error without mutating if `pos` is outside the grid or blocked,
    /// or if `letter` is neither an ASCII letter nor `'_'`.
    pub fn fill_letter(&mut self, pos: Position, letter: char) -> Result<(), GridError> {
        let idx = self.index(pos)?;

        let value = match letter {
            EMPTY_LETTER => None,
            c if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            c => return Err(GridError::InvalidLetter(c)),
        };

        match &mut self.cells[idx] {
            Cell::Open { letter, .. } => {
                *letter = value;
                Ok(())
            }
            Cell::Blocked => Err(GridError::BlockedCell(pos)),
        }
    }

    /// Remove every letter, keeping the layout
    pub fn clear_letters(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Open { letter, .. } = cell {
                *letter = None;
            }
        }
    }

    /// Whether `pos` is the first cell of an across slot
    #[must_use]
    pub fn starts_across(&self, pos: Position) -> bool {
        self.number_at(pos).is_some()
            && (pos.col == 0 || self.is_blocked(Position::new(pos.row, pos.col - 1)))
    }

    /// Whether `pos` is the first cell of a down slot
    #[must_use]
    pub fn starts_down(&self, pos: Position) -> bool {
        self.number_at(pos).is_some()
            && (pos.row == 0 || self.is_blocked(Position::new(pos.row - 1, pos.col)))
    }

    /// Start cell of a clue number
    #[must_use]
    pub fn position_of(&self, number: u32) -> Option<Position> {
        if number == 0 {
            return None;
        }
        self.cells
            .iter()
            .position(|cell| cell.number() == Some(number))
            .map(|idx| Position::new(idx / self.width, idx % self.width))
    }

    /// Cells of a slot, from its start cell to the next blocked cell or edge
    ///
    /// Returns `None` if `number` does not start a slot in `direction`.
    #[must_use]
    pub fn slot(&self, number: u32, direction: Direction) -> Option<Vec<Position>> {
        let start = self.position_of(number)?;
        let starts = match direction {
            Direction::Across => self.starts_across(start),
            Direction::Down => self.starts_down(start),
        };
        if !starts {
            return None;
        }

        let (dr, dc) = direction.step();
        let mut cells = Vec::new();
        let mut pos = start;
        while !self.is_blocked(pos) {
            cells.push(pos);
            pos = Position::new(pos.row + dr, pos.col + dc);
        }
        Some(cells)
    }

    /// Current letters of a slot as a lowercase search pattern, `_` for empty cells
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::{Direction, Grid, Position};
    ///
    /// let mut grid = Grid::new(4, 4).unwrap();
    /// grid.fill_letter(Position::new(0, 1), 'R').unwrap();
    /// assert_eq!(grid.slot_pattern(1, Direction::Across).as_deref(), Some("_r__"));
    /// ```
    #[must_use]
    pub fn slot_pattern(&self, number: u32, direction: Direction) -> Option<String> {
        let cells = self.slot(number, direction)?;
        Some(
            cells
                .into_iter()
                .filter_map(|pos| self.get(pos))
                .map(|cell| cell.letter_code().to_ascii_lowercase())
                .collect(),
        )
    }

    /// Write an accepted word into a slot
    ///
    /// # Errors
    /// Returns an error without mutating if the slot does not exist, the word
    /// length differs from the slot length, or the word has a non-letter character.
    pub fn fill_word(
        &mut self,
        number: u32,
        direction: Direction,
        word: &str,
    ) -> Result<(), GridError> {
        let cells = self
            .slot(number, direction)
            .ok_or(GridError::UnknownSlot { number, direction })?;

        let letters: Vec<char> = word.trim().chars().collect();
        if letters.len() != cells.len() {
            return Err(GridError::WordLength {
                expected: cells.len(),
                actual: letters.len(),
            });
        }
        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GridError::InvalidLetter(bad));
        }

        for (pos, letter) in cells.into_iter().zip(letters) {
            self.fill_letter(pos, letter)?;
        }
        Ok(())
    }
}
