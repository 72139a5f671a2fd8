//! Template commands
//!
//! Lists the templates in a file and creates blank ones.

use crate::codec::{CodecError, TemplateLibrary, write_template};
use crate::core::{GridError, PuzzleDocument};

/// Templates read from a file, plus the records that could not be read
pub struct TemplateListing {
    pub library: TemplateLibrary,
    pub skipped: Vec<CodecError>,
}

/// Read a template file into a sorted library
#[must_use]
pub fn list_templates(text: &str) -> TemplateListing {
    let (library, skipped) = TemplateLibrary::from_text(text);
    TemplateListing { library, skipped }
}

/// A blank template in template form
///
/// # Errors
///
/// Returns `GridError::SizeOutOfBounds` if either dimension is outside `[3, 20]`.
///
/// # Examples
/// ```
/// use crossword_maker::commands::new_template;
///
/// assert_eq!(new_template(3, 3).unwrap(), "3 x 3 (Hard)\n3\n3\n0\n000000000\n");
/// assert!(new_template(3, 40).is_err());
/// ```
pub fn new_template(width: usize, height: usize) -> Result<String, GridError> {
    PuzzleDocument::blank(width, height).map(|doc| write_template(&doc))
}
