//! Command implementations

pub mod find;
pub mod inspect;
pub mod suggest;
pub mod templates;

pub use find::{FindConfig, FindResult, run_find};
pub use inspect::{PuzzleSummary, inspect_puzzle};
pub use suggest::{SuggestConfig, SuggestResult, suggest_words};
pub use templates::{TemplateListing, list_templates, new_template};
