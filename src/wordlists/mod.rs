//! Dictionaries for slot searches
//!
//! Two word lists are compiled into the binary: a short list of common words and
//! a long list that adds rarer entries. Either can be replaced by a file at runtime.

mod embedded;
pub mod loader;

pub use embedded::{LONG, LONG_COUNT, SHORT, SHORT_COUNT};
