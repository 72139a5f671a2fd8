//! Dictionary-backed word search
//!
//! Given a slot pattern (letters plus `_`, `@` and `#` wildcards), find the
//! dictionary words that fit it.

mod dictionary;
mod search;

pub use dictionary::{Dictionary, DictionaryIndex};
pub use search::{Matches, find_alternating, find_matches, par_find_matches};
