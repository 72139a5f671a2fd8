//! Parsing of puzzles and templates from the line-oriented text format
//!
//! Only the blocked/open layout is trusted from storage: clue numbers are always
//! recomputed, and clue descriptions are attached to the recomputed slots by their
//! position in the stored lists.

use super::writer::BLOCKED_CODE;
use crate::core::{
    Cell, Clue, ClueList, EMPTY_LETTER, Grid, GridError, Position, PuzzleDocument, check_size,
};
use std::fmt;
use std::iter::Enumerate;
use std::str::Lines;

/// Lines in one template record
pub const TEMPLATE_LINES: usize = 5;

/// Why a stored record was rejected
///
/// Line numbers are 1-based within the text handed to the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    MissingLine {
        line: usize,
        field: &'static str,
    },
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    Grid {
        line: usize,
        source: GridError,
    },
    CodeLength {
        line: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    InvalidClue {
        line: usize,
        text: String,
    },
    ClueCount {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLine { line, field } => write!(f, "line {line}: missing {field}"),
            Self::InvalidNumber { line, field, value } => {
                write!(f, "line {line}: {field} '{value}' is not a number")
            }
            Self::Grid { line, source } => write!(f, "line {line}: {source}"),
            Self::CodeLength {
                line,
                field,
                expected,
                actual,
            } => write!(
                f,
                "line {line}: {field} has {actual} characters, expected {expected}"
            ),
            Self::InvalidClue { line, text } => {
                write!(f, "line {line}: '{text}' is not a clue (expected 'number. text')")
            }
            Self::ClueCount { expected, actual } => {
                write!(f, "grid has {expected} clues but {actual} were stored")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Line cursor that remembers line numbers for error reporting
struct Cursor<'a> {
    lines: Enumerate<Lines<'a>>,
    offset: usize,
    last_line: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, offset: usize) -> Self {
        Self {
            lines: text.lines().enumerate(),
            offset,
            last_line: offset,
        }
    }

    fn next_line(&mut self, field: &'static str) -> Result<(usize, &'a str), CodecError> {
        match self.lines.next() {
            Some((idx, line)) => {
                self.last_line = self.offset + idx + 1;
                Ok((self.last_line, line))
            }
            None => Err(CodecError::MissingLine {
                line: self.last_line + 1,
                field,
            }),
        }
    }

    fn next_number(&mut self, field: &'static str) -> Result<usize, CodecError> {
        let (line, text) = self.next_line(field)?;
        text.trim()
            .parse()
            .map_err(|_| CodecError::InvalidNumber {
                line,
                field,
                value: text.to_string(),
            })
    }

    fn rest(&mut self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        let offset = self.offset;
        self.lines.by_ref().map(move |(idx, line)| (offset + idx + 1, line))
    }
}

/// Header and layout shared by both forms
struct Layout {
    name: String,
    grid: Grid,
}

fn read_layout(cursor: &mut Cursor<'_>) -> Result<Layout, CodecError> {
    let (_, name) = cursor.next_line("name")?;
    let width = cursor.next_number("width")?;
    let height = cursor.next_number("height")?;
    check_size(width, height).map_err(|source| CodecError::Grid {
        line: cursor.last_line,
        source,
    })?;
    let stored_filled = cursor.next_number("filled count")?;

    let (line, code) = cursor.next_line("cell code")?;
    let cells = parse_cell_code(code, width * height).map_err(|actual| {
        CodecError::CodeLength {
            line,
            field: "cell code",
            expected: width * height,
            actual,
        }
    })?;
    let grid =
        Grid::from_cells(width, height, cells).map_err(|source| CodecError::Grid { line, source })?;

    if grid.filled_count() != stored_filled {
        log::warn!(
            "'{name}': stored filled count {stored_filled} differs from layout ({})",
            grid.filled_count()
        );
    }

    Ok(Layout {
        name: name.to_string(),
        grid,
    })
}

/// `'!'` marks a blocked cell; any other character is open. Errors with the actual length.
fn parse_cell_code(code: &str, expected: usize) -> Result<Vec<Cell>, usize> {
    let cells: Vec<Cell> = code
        .chars()
        .map(|c| if c == BLOCKED_CODE { Cell::Blocked } else { Cell::EMPTY })
        .collect();
    if cells.len() == expected {
        Ok(cells)
    } else {
        Err(cells.len())
    }
}

fn apply_letters(grid: &mut Grid, code: &str) -> Result<(), usize> {
    let letters: Vec<char> = code.chars().collect();
    if letters.len() != grid.width() * grid.height() {
        return Err(letters.len());
    }

    let width = grid.width();
    for (k, letter) in letters.into_iter().enumerate() {
        if letter == EMPTY_LETTER {
            continue;
        }
        let pos = Position::new(k / width, k % width);
        if grid.is_blocked(pos) {
            log::debug!("Dropping letter '{letter}' stored in blocked cell {pos}");
            continue;
        }
        if let Err(e) = grid.fill_letter(pos, letter) {
            log::warn!("Dropping stored letter at {pos}: {e}");
        }
    }
    Ok(())
}

/// Parse one stored clue line, `"{number}. {text}"`
///
/// The line is split on its first `.`; the left part must be a number and the
/// rest, trimmed, is the description.
///
/// # Errors
/// Returns `CodecError::InvalidClue` if there is no `.` or the prefix is not a number.
///
/// # Examples
/// ```
/// use crossword_maker::codec::parse_clue_line;
///
/// let clue = parse_clue_line(7, "12. Opposite of off. Or on?").unwrap();
/// assert_eq!(clue.number, 12);
/// assert_eq!(clue.text, "Opposite of off. Or on?");
///
/// assert!(parse_clue_line(8, "no separator").is_err());
/// ```
pub fn parse_clue_line(line: usize, text: &str) -> Result<Clue, CodecError> {
    let invalid = || CodecError::InvalidClue {
        line,
        text: text.to_string(),
    };

    let (number, description) = text.split_once('.').ok_or_else(invalid)?;
    let number = number.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok(Clue::new(number, description.trim()))
}

/// Split stored clues into across and down where the number first decreases
///
/// This is how the format marks the boundary: once a clue number is lower than
/// the one before it, that clue and all following ones are down clues.
#[must_use]
pub fn split_by_decrease(clues: Vec<Clue>) -> ClueList {
    let mut list = ClueList::default();
    let mut previous: Option<u32> = None;
    let mut in_down = false;

    for clue in clues {
        if previous.is_some_and(|p| clue.number < p) {
            in_down = true;
        }
        previous = Some(clue.number);
        if in_down {
            list.down.push(clue);
        } else {
            list.across.push(clue);
        }
    }
    list
}

/// Attach stored descriptions to the grid's derived slots, by position in each list
fn attach_descriptions(
    name: &str,
    grid: &Grid,
    stored: Vec<Clue>,
) -> Result<ClueList, CodecError> {
    let mut derived = ClueList::derive(grid);
    if stored.len() != derived.len() {
        return Err(CodecError::ClueCount {
            expected: derived.len(),
            actual: stored.len(),
        });
    }

    let split = split_by_decrease(stored);
    let (across, down) = if split.across.len() == derived.across.len() {
        (split.across, split.down)
    } else {
        log::warn!(
            "'{name}': clue numbers split {}/{} but the grid has {}/{} across/down slots; \
             splitting by slot count",
            split.across.len(),
            split.down.len(),
            derived.across.len(),
            derived.down.len()
        );
        let mut all = split.across;
        all.extend(split.down);
        let down = all.split_off(derived.across.len());
        (all, down)
    };

    for (slot, stored) in derived.across.iter_mut().zip(across) {
        slot.text = stored.text;
    }
    for (slot, stored) in derived.down.iter_mut().zip(down) {
        slot.text = stored.text;
    }
    Ok(derived)
}

/// Read a single template-form record
///
/// # Errors
/// Returns a `CodecError` describing the first problem found.
pub fn read_template(text: &str) -> Result<PuzzleDocument, CodecError> {
    read_template_at(text, 0)
}

fn read_template_at(text: &str, offset: usize) -> Result<PuzzleDocument, CodecError> {
    let mut cursor = Cursor::new(text, offset);
    let Layout { name, grid } = read_layout(&mut cursor)?;
    let clues = ClueList::derive(&grid);
    Ok(PuzzleDocument::new(name, grid, clues))
}

/// Read a full-form puzzle: layout, letters and clues
///
/// Blank lines among the clues are ignored.
///
/// # Errors
/// Returns a `CodecError` if any line is missing or malformed, or if the number of
/// stored clues differs from the number of slots in the layout.
///
/// # Examples
/// ```
/// use crossword_maker::codec::read_puzzle;
/// use crossword_maker::core::Direction;
///
/// let text = "Mini\n3\n3\n0\n000000000\nCAT______\n\
///             1. Feline\n4. \n5. \n1. \n2. \n3. Nap";
/// let doc = read_puzzle(text).unwrap();
/// assert_eq!(doc.name(), "Mini");
/// assert_eq!(doc.clues().across[0].text, "Feline");
/// assert_eq!(doc.clues().get(Direction::Down)[2].text, "Nap");
/// ```
pub fn read_puzzle(text: &str) -> Result<PuzzleDocument, CodecError> {
    let mut cursor = Cursor::new(text, 0);
    let Layout { name, mut grid } = read_layout(&mut cursor)?;

    let (line, code) = cursor.next_line("letter code")?;
    apply_letters(&mut grid, code).map_err(|actual| CodecError::CodeLength {
        line,
        field: "letter code",
        expected: grid.width() * grid.height(),
        actual,
    })?;

    let stored = cursor
        .rest()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(line, text)| parse_clue_line(line, text))
        .collect::<Result<Vec<_>, _>>()?;

    let clues = attach_descriptions(&name, &grid, stored)?;
    log::debug!(
        "Read puzzle '{name}': {}x{}, {} clues",
        grid.width(),
        grid.height(),
        clues.len()
    );
    Ok(PuzzleDocument::new(name, grid, clues))
}

/// Templates read from a multi-record file, plus the records that were skipped
#[derive(Debug, Default)]
pub struct TemplateBatch {
    pub templates: Vec<PuzzleDocument>,
    pub errors: Vec<CodecError>,
}

fn parse_count(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

/// Whether `lines` begins with something shaped like a template header
///
/// That is a name line, three numeric lines, then a cell code whose length is
/// the product of the first two numbers.
fn starts_record(lines: &[&str]) -> bool {
    let [_, width, height, filled, code, ..] = lines else {
        return false;
    };
    match (parse_count(width), parse_count(height), parse_count(filled)) {
        (Some(width), Some(height), Some(_)) => code.chars().count() == width * height,
        _ => false,
    }
}

/// Read every template record in a file
///
/// Records are consecutive five-line blocks. A malformed record is reported in
/// `errors` and skipped; reading resumes at the next line that looks like a
/// record header, so one damaged record does not take the rest of the file with it.
#[must_use]
pub fn read_templates(text: &str) -> TemplateBatch {
    let lines: Vec<&str> = text.lines().collect();
    let used = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);
    let lines = &lines[..used];

    let mut batch = TemplateBatch::default();
    let mut start = 0;
    while start < lines.len() {
        let end = (start + TEMPLATE_LINES).min(lines.len());
        let record = lines[start..end].join("\n");
        match read_template_at(&record, start) {
            Ok(template) => {
                batch.templates.push(template);
                start = end;
            }
            Err(e) => {
                log::warn!("Skipping template record at line {}: {e}", start + 1);
                batch.errors.push(e);
                match (start + 1..lines.len()).find(|&at| starts_record(&lines[at..])) {
                    Some(next) => start = next,
                    None => break,
                }
            }
        }
    }
    batch
}
