//! Across and down clue lists derived from a numbered grid

use super::cell::{Direction, Position};
use super::grid::Grid;
use std::fmt;

/// Collapse line breaks to spaces so the text stays on one stored line
#[must_use]
pub fn single_line(text: String) -> String {
    if text.contains(['\n', '\r']) {
        text.replace(['\n', '\r'], " ")
    } else {
        text
    }
}

/// A clue number with its description ("" until the author writes one)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub number: u32,
    pub text: String,
}

impl Clue {
    #[must_use]
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: single_line(text.into()).trim().to_string(),
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.text)
    }
}

/// Ordered across and down clues, both ascending by number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueList {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

impl ClueList {
    /// Derive empty clues for every slot start in the grid
    ///
    /// A numbered cell starts an across clue when it is on the left edge or its left
    /// neighbour is blocked, and a down clue when it is on the top edge or the cell
    /// above is blocked. Row-major scanning keeps both lists ascending.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::core::{ClueList, Direction, Grid};
    ///
    /// let grid = Grid::new(3, 3).unwrap();
    /// let clues = ClueList::derive(&grid);
    /// assert_eq!(clues.numbers(Direction::Across), vec![1, 4, 5]);
    /// assert_eq!(clues.numbers(Direction::Down), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn derive(grid: &Grid) -> Self {
        let mut clues = Self::default();

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let pos = Position::new(row, col);
                let Some(number) = grid.number_at(pos) else {
                    continue;
                };
                if grid.starts_across(pos) {
                    clues.across.push(Clue::new(number, ""));
                }
                if grid.starts_down(pos) {
                    clues.down.push(Clue::new(number, ""));
                }
            }
        }

        clues
    }

    #[must_use]
    pub fn get(&self, direction: Direction) -> &[Clue] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    fn get_mut(&mut self, direction: Direction) -> &mut Vec<Clue> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    /// Clue numbers in one direction, in list order
    #[must_use]
    pub fn numbers(&self, direction: Direction) -> Vec<u32> {
        self.get(direction).iter().map(|clue| clue.number).collect()
    }

    /// Total number of clues in both directions
    #[must_use]
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Position of a clue within its list
    #[must_use]
    pub fn index_of(&self, direction: Direction, number: u32) -> Option<usize> {
        self.get(direction)
            .iter()
            .position(|clue| clue.number == number)
    }

    /// Replace a clue's description; returns `false` if there is no such clue
    ///
    /// Line breaks become spaces and surrounding whitespace is trimmed.
    pub fn set_text(&mut self, direction: Direction, number: u32, text: impl Into<String>) -> bool {
        match self
            .get_mut(direction)
            .iter_mut()
            .find(|clue| clue.number == number)
        {
            Some(clue) => {
                clue.text = single_line(text.into()).trim().to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_symmetric_blocks() {
        // .#.      1 # 2
        // ...  ->  3 4 .
        // .#.      5 # 6
        let mut grid = Grid::new(3, 3).unwrap();
        grid.toggle_blocked(Position::new(0, 1)).unwrap();
        assert!(grid.is_blocked(Position::new(2, 1)));

        let clues = ClueList::derive(&grid);
        assert_eq!(clues.numbers(Direction::Across), vec![1, 2, 3, 5, 6]);
        assert_eq!(clues.numbers(Direction::Down), vec![1, 2, 4]);
    }

    #[test]
    fn single_blocked_cell_layout() {
        use crate::core::Cell;

        // .#.      1 # 2
        // ...  ->  3 4 .
        // ...      5 . .
        let cells = vec![
            Cell::EMPTY,
            Cell::Blocked,
            Cell::EMPTY,
            Cell::EMPTY,
            Cell::EMPTY,
            Cell::EMPTY,
            Cell::EMPTY,
            Cell::EMPTY,
            Cell::EMPTY,
        ];
        let grid = Grid::from_cells(3, 3, cells).unwrap();
        let clues = ClueList::derive(&grid);

        assert_eq!(clues.numbers(Direction::Across), vec![1, 2, 3, 5]);
        assert_eq!(clues.numbers(Direction::Down), vec![1, 2, 4]);
        assert!(clues.across.iter().all(|clue| clue.text.is_empty()));
    }

    #[test]
    fn lists_are_ascending() {
        let mut grid = Grid::new(7, 7).unwrap();
        for pos in [Position::new(0, 3), Position::new(1, 1), Position::new(3, 0)] {
            grid.toggle_blocked(pos).unwrap();
        }
        let clues = ClueList::derive(&grid);
        for direction in [Direction::Across, Direction::Down] {
            let numbers = clues.numbers(direction);
            assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{numbers:?}");
        }
    }

    #[test]
    fn index_and_set_text() {
        let grid = Grid::new(3, 3).unwrap();
        let mut clues = ClueList::derive(&grid);

        assert_eq!(clues.index_of(Direction::Across, 5), Some(2));
        assert_eq!(clues.index_of(Direction::Down, 5), None);

        assert!(clues.set_text(Direction::Down, 2, "Opposite of off"));
        assert_eq!(clues.down[1].text, "Opposite of off");
        assert!(!clues.set_text(Direction::Down, 9, "missing"));
        assert_eq!(clues.len(), 6);
    }

    #[test]
    fn clue_text_stays_on_one_line() {
        let grid = Grid::new(3, 3).unwrap();
        let mut clues = ClueList::derive(&grid);

        assert!(clues.set_text(Direction::Across, 4, "two\nlines\r\n"));
        assert_eq!(clues.across[1].text, "two lines");
        assert_eq!(Clue::new(1, " a\rb ").text, "a b");
    }

    #[test]
    fn clue_display() {
        assert_eq!(Clue::new(12, "Desire").to_string(), "12. Desire");
    }
}
