//! Core domain types for crossword construction
//!
//! Grids, clue numbering and clue lists, puzzle documents, dictionary words and
//! search patterns. Everything here is pure in-memory data with synchronous
//! operations; callers re-query after each mutation.

mod cell;
mod clue;
mod grid;
mod pattern;
mod puzzle;
mod word;

pub use cell::{Cell, Direction, EMPTY_LETTER, Position};
pub use clue::{Clue, ClueList, single_line};
pub use grid::{DEFAULT_SIZE, Grid, GridError, MAX_SIZE, MIN_SIZE, check_size};
pub use pattern::{Pattern, Token};
pub use puzzle::{Difficulty, PuzzleDocument, template_name};
pub use word::{Word, WordError, is_consonant, is_vowel};
