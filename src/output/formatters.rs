//! Formatting utilities for terminal output

use crate::core::{Cell, Clue, Grid, Position};

/// Character drawn for a blocked cell
pub const BLOCK_GLYPH: char = '#';
/// Character drawn for an open cell without a letter
pub const EMPTY_GLYPH: char = '.';

/// One character per cell: the letter, `#` for blocked, `.` for empty
#[must_use]
pub fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Blocked => BLOCK_GLYPH,
        Cell::Open { letter, .. } => letter.unwrap_or(EMPTY_GLYPH),
    }
}

/// The grid as plain text rows, cells separated by a space
///
/// # Examples
/// ```
/// use crossword_maker::core::{Grid, Position};
/// use crossword_maker::output::formatters::grid_rows;
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// grid.toggle_blocked(Position::new(0, 0)).unwrap();
/// grid.fill_letter(Position::new(0, 1), 'h').unwrap();
/// assert_eq!(grid_rows(&grid), vec!["# H .", ". . .", ". . #"]);
/// ```
#[must_use]
pub fn grid_rows(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|row| {
            grid.row(row)
                .iter()
                .map(|&cell| cell_glyph(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Clue numbers laid out on the grid, `##` for blocked and blank for unnumbered cells
#[must_use]
pub fn number_rows(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| {
                    let pos = Position::new(row, col);
                    if grid.is_blocked(pos) {
                        "##".to_string()
                    } else {
                        grid.number_at(pos)
                            .map_or_else(|| "  ".to_string(), |n| format!("{n:>2}"))
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// A clue line for listings, with a placeholder when no text is written yet
#[must_use]
pub fn clue_line(clue: &Clue) -> String {
    if clue.text.is_empty() {
        format!("{:>3}. (no clue yet)", clue.number)
    } else {
        format!("{:>3}. {}", clue.number, clue.text)
    }
}

/// Percentage of `part` in `whole`, `0` when `whole` is empty
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}
