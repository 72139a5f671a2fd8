//! Crossword Maker
//!
//! Grid design, clue numbering and dictionary pattern search for crossword construction.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_maker::core::{Direction, Position, PuzzleDocument};
//! use crossword_maker::matcher::{DictionaryIndex, find_matches};
//!
//! // Design a grid
//! let mut doc = PuzzleDocument::blank(5, 5).unwrap();
//! doc.toggle_blocked(Position::new(0, 0)).unwrap();
//!
//! // Search for words that fit a slot
//! let dictionaries = DictionaryIndex::embedded();
//! let pattern = doc.grid().slot_pattern(1, Direction::Across).unwrap();
//! let first = find_matches(dictionaries.short(), &pattern).next();
//! assert!(first.is_some());
//! ```

// Core domain types
pub mod core;

// Dictionary search
pub mod matcher;

// Word lists
pub mod wordlists;

// Text format for puzzles and templates
pub mod codec;

// Shell-facing session
pub mod session;

// Logger setup
pub mod log;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
