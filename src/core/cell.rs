//! Cell-level types: positions, cell state and slot directions

use std::fmt;

/// A cell coordinate, addressed as row then column
///
/// Row-major index `k` in a grid of width `w` maps to `row = k / w`, `col = k % w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single grid cell
///
/// Blocked cells never hold a letter or a number. Open cells carry a clue
/// number (0 when the cell does not start a word) and an optional letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blocked,
    Open { number: u32, letter: Option<char> },
}

impl Cell {
    /// An open cell with no number and no letter
    pub const EMPTY: Self = Self::Open {
        number: 0,
        letter: None,
    };

    #[inline]
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        !self.is_blocked()
    }

    /// Clue number of the cell, `None` for blocked or unnumbered cells
    #[inline]
    #[must_use]
    pub const fn number(self) -> Option<u32> {
        match self {
            Self::Open { number, .. } if number > 0 => Some(number),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Open { letter, .. } => letter,
            Self::Blocked => None,
        }
    }

    /// Character used in the letter code: the letter, or `'_'` when empty or blocked
    #[must_use]
    pub fn letter_code(self) -> char {
        self.letter().unwrap_or(EMPTY_LETTER)
    }
}

/// Marker for an empty cell in letter codes and slot patterns
pub const EMPTY_LETTER: char = '_';

/// Orientation of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Row/column step for one cell along this direction
    #[inline]
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// Parse a direction name ("across"/"a", "down"/"d"), case-insensitive
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "across" | "a" => Some(Self::Across),
            "down" | "d" => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "Across"),
            Self::Down => write!(f, "Down"),
        }
    }
}
