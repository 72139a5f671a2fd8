//! Line-oriented text format for puzzles and templates
//!
//! A template is five lines: name, width, height, blocked-cell count and a
//! row-major cell code (`!` blocked, `0` open). A full puzzle adds a row-major
//! letter code (`_` for empty) and one `"{number}. {text}"` line per clue, across
//! first, then down.

mod reader;
mod templates;
mod writer;

pub use reader::{
    CodecError, TEMPLATE_LINES, TemplateBatch, parse_clue_line, read_puzzle, read_template,
    read_templates, split_by_decrease,
};
pub use templates::TemplateLibrary;
pub use writer::{BLOCKED_CODE, OPEN_CODE, cell_code, letter_code, write_puzzle, write_template};
