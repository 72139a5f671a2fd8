//! Serialization of puzzles and templates to the line-oriented text format

use crate::core::{Cell, Clue, PuzzleDocument};
use std::fmt::Write;

/// Cell code for a blocked cell
pub const BLOCKED_CODE: char = '!';
/// Cell code for an open cell
pub const OPEN_CODE: char = '0';

/// Blocked/open code string in row-major order
#[must_use]
pub fn cell_code(doc: &PuzzleDocument) -> String {
    doc.grid()
        .cells()
        .iter()
        .map(|cell| if cell.is_blocked() { BLOCKED_CODE } else { OPEN_CODE })
        .collect()
}

/// Letter code string in row-major order, `_` for empty and blocked cells
#[must_use]
pub fn letter_code(doc: &PuzzleDocument) -> String {
    doc.grid().cells().iter().copied().map(Cell::letter_code).collect()
}

/// Template form: name, width, height, filled count and cell code, each ending in `\n`
///
/// # Examples
/// ```
/// use crossword_maker::codec::write_template;
/// use crossword_maker::core::{Position, PuzzleDocument};
///
/// let mut doc = PuzzleDocument::blank(3, 3).unwrap();
/// doc.toggle_blocked(Position::new(0, 0)).unwrap();
/// assert_eq!(write_template(&doc), "3 x 3 (Easy)\n3\n3\n2\n!0000000!\n");
/// ```
#[must_use]
pub fn write_template(doc: &PuzzleDocument) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n",
        doc.name(),
        doc.width(),
        doc.height(),
        doc.filled_count(),
        cell_code(doc)
    )
}

/// Full form: template form, the letter code, then across and down clues
///
/// Each clue is written on its own line as `"{number}. {text}"`. The text has no
/// trailing newline.
#[must_use]
pub fn write_puzzle(doc: &PuzzleDocument) -> String {
    let mut out = write_template(doc);
    out.push_str(&letter_code(doc));

    let clues = doc.clues();
    for clue in clues.across.iter().chain(&clues.down) {
        write_clue(&mut out, clue);
    }
    out
}

fn write_clue(out: &mut String, clue: &Clue) {
    // Writing to a String cannot fail
    let _ = write!(out, "\n{}. {}", clue.number, clue.text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Position};

    #[test]
    fn blank_template() {
        let doc = PuzzleDocument::blank(3, 4).unwrap();
        assert_eq!(write_template(&doc), "3 x 4 (Hard)\n3\n4\n0\n000000000000\n");
    }

    #[test]
    fn cell_code_is_row_major() {
        // Width 4, height 3: (0, 1) and its partner (2, 2)
        let mut doc = PuzzleDocument::blank(4, 3).unwrap();
        doc.toggle_blocked(Position::new(0, 1)).unwrap();
        assert_eq!(cell_code(&doc), "0!00000000!0");
        assert_eq!(cell_code(&doc).chars().nth(10), Some('!'));
    }

    #[test]
    fn full_puzzle() {
        let mut doc = PuzzleDocument::blank(3, 3).unwrap();
        doc.toggle_blocked(Position::new(1, 1)).unwrap();
        doc.fill_word(1, Direction::Across, "cat").unwrap();
        doc.set_clue_text(Direction::Across, 1, "Feline");
        doc.set_clue_text(Direction::Down, 3, "Nap");

        let text = write_puzzle(&doc);
        // 1 2 3
        // 4 # 5
        // 6 7 .
        let expected = "3 x 3 (Hard)\n3\n3\n1\n0000!0000\nCAT______\n\
                        1. Feline\n4. \n5. \n6. \n1. \n2. \n3. Nap\n7. ";
        assert_eq!(text, expected);
    }
}
