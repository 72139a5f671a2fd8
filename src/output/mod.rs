//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_find_result, print_puzzle_summary, print_suggest_result, print_template_listing,
};
