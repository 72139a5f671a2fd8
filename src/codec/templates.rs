//! Ordered collection of grid templates read from a multi-record file

use super::reader::{CodecError, read_templates};
use super::writer::write_template;
use crate::core::PuzzleDocument;

/// Templates ordered by width, then by blocked-cell count (most blocked first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateLibrary {
    templates: Vec<PuzzleDocument>,
}

impl TemplateLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a template file, returning the library and the records that were skipped
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::codec::TemplateLibrary;
    ///
    /// let text = "Wide\n5\n3\n0\n000000000000000\nNarrow\n3\n3\n0\n000000000\n";
    /// let (library, errors) = TemplateLibrary::from_text(text);
    /// assert!(errors.is_empty());
    /// assert_eq!(library.get(0).map(|t| t.name()), Some("Narrow"));
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> (Self, Vec<CodecError>) {
        let batch = read_templates(text);
        let mut library = Self::new();
        for template in batch.templates {
            library.insert(template);
        }
        log::debug!(
            "Template library: {} loaded, {} skipped",
            library.len(),
            batch.errors.len()
        );
        (library, batch.errors)
    }

    /// Add a template at its sorted position
    ///
    /// It goes before the first entry that is wider, or as wide with no more
    /// blocked cells; otherwise at the end.
    pub fn insert(&mut self, template: PuzzleDocument) {
        let width = template.width();
        let filled = template.filled_count();
        let at = self
            .templates
            .iter()
            .position(|t| t.width() > width || (t.width() == width && t.filled_count() <= filled))
            .unwrap_or(self.templates.len());
        self.templates.insert(at, template);
    }

    /// Recompute every template's automatic size-and-difficulty name
    pub fn reset_names(&mut self) {
        for template in &mut self.templates {
            template.refresh_name();
        }
    }

    /// Index reached by stepping once from `index`, wrapping at both ends
    ///
    /// Returns `None` for an empty library.
    #[must_use]
    pub fn next(&self, index: usize, forward: bool) -> Option<usize> {
        let len = self.templates.len();
        if len == 0 {
            return None;
        }
        let index = index % len;
        Some(if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        })
    }

    /// All templates in template form, one block after another
    #[must_use]
    pub fn to_text(&self) -> String {
        self.templates.iter().map(write_template).collect()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PuzzleDocument> {
        self.templates.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PuzzleDocument> {
        self.templates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn template(width: usize, height: usize, blocks: &[(usize, usize)]) -> PuzzleDocument {
        let mut doc = PuzzleDocument::blank(width, height).unwrap();
        for &(row, col) in blocks {
            doc.toggle_blocked(Position::new(row, col)).unwrap();
        }
        doc
    }

    fn shape(library: &TemplateLibrary) -> Vec<(usize, usize)> {
        library
            .iter()
            .map(|t| (t.width(), t.filled_count()))
            .collect()
    }

    #[test]
    fn insert_orders_by_width_then_blocks_descending() {
        let mut library = TemplateLibrary::new();
        library.insert(template(5, 5, &[(0, 0)]));
        library.insert(template(3, 3, &[]));
        library.insert(template(5, 5, &[(0, 0), (0, 1)]));
        library.insert(template(7, 7, &[]));
        library.insert(template(5, 5, &[]));

        assert_eq!(shape(&library), vec![(3, 0), (5, 4), (5, 2), (5, 0), (7, 0)]);
    }

    #[test]
    fn equal_template_goes_first() {
        let mut library = TemplateLibrary::new();
        let mut first = template(4, 4, &[(0, 0)]);
        first.set_name("first");
        let mut second = template(4, 4, &[(0, 1)]);
        second.set_name("second");

        library.insert(first);
        library.insert(second);
        assert_eq!(library.get(0).map(PuzzleDocument::name), Some("second"));
    }

    #[test]
    fn cyclic_navigation() {
        let mut library = TemplateLibrary::new();
        assert_eq!(library.next(0, true), None);

        for size in [3, 4, 5] {
            library.insert(template(size, size, &[]));
        }
        assert_eq!(library.next(0, true), Some(1));
        assert_eq!(library.next(2, true), Some(0));
        assert_eq!(library.next(0, false), Some(2));
        assert_eq!(library.next(1, false), Some(0));
    }

    #[test]
    fn reset_names_relabels() {
        let mut library = TemplateLibrary::new();
        let mut doc = template(3, 3, &[(0, 0)]);
        doc.set_name("custom");
        library.insert(doc);

        library.reset_names();
        assert_eq!(library.get(0).map(PuzzleDocument::name), Some("3 x 3 (Easy)"));
    }

    #[test]
    fn text_round_trip() {
        let mut library = TemplateLibrary::new();
        library.insert(template(3, 3, &[(1, 1)]));
        library.insert(template(6, 4, &[(0, 2), (1, 0)]));

        let text = library.to_text();
        let (back, errors) = TemplateLibrary::from_text(&text);
        assert!(errors.is_empty());
        assert_eq!(back, library);
        assert_eq!(back.to_text(), text);
    }
}
