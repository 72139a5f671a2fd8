//! The editing session a shell drives
//!
//! A session owns at most one active puzzle plus the template library, and shares
//! the dictionaries read-only. Every call is synchronous; after a mutation the
//! caller re-reads whatever it displays.

use crate::codec::{CodecError, TemplateLibrary, read_puzzle, write_puzzle};
use crate::core::{ClueList, Direction, GridError, Position, PuzzleDocument, Word};
use crate::matcher::{DictionaryIndex, find_alternating, find_matches};
use std::fmt;
use std::sync::Arc;

/// Errors returned by session calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The call needs an active puzzle and none is open
    NoDocument,
    /// Template browsing was requested with an empty library
    NoTemplates,
    Grid(GridError),
    Codec(CodecError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "No puzzle is open"),
            Self::NoTemplates => write!(f, "No templates are loaded"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Codec(e) => write!(f, "Malformed document: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Codec(e) => Some(e),
            Self::NoDocument | Self::NoTemplates => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<CodecError> for SessionError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// One editing session
pub struct Session {
    dictionaries: Arc<DictionaryIndex>,
    document: Option<PuzzleDocument>,
    templates: TemplateLibrary,
    template_index: usize,
}

impl Session {
    #[must_use]
    pub fn new(dictionaries: Arc<DictionaryIndex>) -> Self {
        Self {
            dictionaries,
            document: None,
            templates: TemplateLibrary::new(),
            template_index: 0,
        }
    }

    /// A session over the dictionaries compiled into the binary
    #[must_use]
    pub fn with_embedded_dictionaries() -> Self {
        Self::new(Arc::new(DictionaryIndex::embedded()))
    }

    #[must_use]
    pub fn dictionaries(&self) -> &Arc<DictionaryIndex> {
        &self.dictionaries
    }

    #[must_use]
    pub fn document(&self) -> Option<&PuzzleDocument> {
        self.document.as_ref()
    }

    fn document_mut(&mut self) -> Result<&mut PuzzleDocument> {
        self.document.as_mut().ok_or(SessionError::NoDocument)
    }

    fn active(&self) -> Result<&PuzzleDocument> {
        self.document.as_ref().ok_or(SessionError::NoDocument)
    }

    /// Replace the active puzzle with a blank grid
    ///
    /// # Errors
    /// Returns `SessionError::Grid` if the size is outside `[3, 20]`; the previous
    /// puzzle stays open.
    ///
    /// # Examples
    /// ```
    /// use crossword_maker::session::Session;
    ///
    /// let mut session = Session::with_embedded_dictionaries();
    /// let doc = session.new_grid(15, 15).unwrap();
    /// assert_eq!(doc.name(), "15 x 15 (Hard)");
    /// assert!(session.new_grid(30, 15).is_err());
    /// ```
    pub fn new_grid(&mut self, width: usize, height: usize) -> Result<&PuzzleDocument> {
        let doc = PuzzleDocument::blank(width, height)?;
        Ok(self.document.insert(doc))
    }

    /// Toggle a cell and its symmetric partner; returns the blocked-count change
    ///
    /// # Errors
    /// Fails without mutating when no puzzle is open or `pos` is outside the grid.
    pub fn toggle_blocked(&mut self, pos: Position) -> Result<i32> {
        Ok(self.document_mut()?.toggle_blocked(pos)?)
    }

    /// # Errors
    /// Fails without mutating when no puzzle is open or the grid rejects the letter.
    pub fn fill_letter(&mut self, pos: Position, letter: char) -> Result<()> {
        Ok(self.document_mut()?.fill_letter(pos, letter)?)
    }

    /// Write an accepted word into a slot
    ///
    /// # Errors
    /// Fails without mutating when no puzzle is open, the slot does not exist or the
    /// word does not fit it.
    pub fn fill_word(&mut self, number: u32, direction: Direction, word: &str) -> Result<()> {
        Ok(self.document_mut()?.fill_word(number, direction, word)?)
    }

    /// Set a clue description; `Ok(false)` when the slot does not exist
    ///
    /// # Errors
    /// Returns `SessionError::NoDocument` when no puzzle is open.
    pub fn set_clue_text(&mut self, direction: Direction, number: u32, text: &str) -> Result<bool> {
        Ok(self.document_mut()?.set_clue_text(direction, number, text))
    }

    /// Rebuild clue numbers from the blocked layout
    ///
    /// # Errors
    /// Returns `SessionError::NoDocument` when no puzzle is open.
    pub fn renumber(&mut self) -> Result<()> {
        self.document_mut()?.renumber();
        Ok(())
    }

    /// The active puzzle's across and down clues
    ///
    /// The lists are re-derived after every layout change, so this never lags the grid.
    ///
    /// # Errors
    /// Returns `SessionError::NoDocument` when no puzzle is open.
    pub fn derive_clues(&self) -> Result<&ClueList> {
        Ok(self.active()?.clues())
    }

    /// Dictionary words matching `pattern`, in dictionary order
    ///
    /// `use_long` searches the extended list; `alternating` keeps only words whose
    /// vowels and consonants alternate.
    #[must_use]
    pub fn find_matches(&self, pattern: &str, use_long: bool, alternating: bool) -> Vec<&Word> {
        let dictionary = self.dictionaries.select(use_long);
        if alternating {
            find_alternating(dictionary, pattern).collect()
        } else {
            find_matches(dictionary, pattern).collect()
        }
    }

    /// Current pattern of a slot and the words that fit it
    ///
    /// # Errors
    /// Returns `SessionError::NoDocument` when no puzzle is open, or
    /// `GridError::UnknownSlot` if `number` does not start a slot in `direction`.
    pub fn suggest(
        &self,
        number: u32,
        direction: Direction,
        use_long: bool,
        alternating: bool,
    ) -> Result<(String, Vec<&Word>)> {
        let pattern = self
            .active()?
            .grid()
            .slot_pattern(number, direction)
            .ok_or(GridError::UnknownSlot { number, direction })?;
        let words = self.find_matches(&pattern, use_long, alternating);
        Ok((pattern, words))
    }

    /// The active puzzle in full text form
    ///
    /// # Errors
    /// Returns `SessionError::NoDocument` when no puzzle is open.
    pub fn serialize(&self) -> Result<String> {
        Ok(write_puzzle(self.active()?))
    }

    /// Replace the active puzzle with one read from full text form
    ///
    /// # Errors
    /// Returns `SessionError::Codec` for a malformed record; the previous puzzle
    /// stays open.
    pub fn deserialize(&mut self, text: &str) -> Result<&PuzzleDocument> {
        let doc = read_puzzle(text)?;
        Ok(self.document.insert(doc))
    }

    #[must_use]
    pub const fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    /// Replace the template library from a template file
    ///
    /// Returns the records that were skipped. Browsing restarts at the first template.
    pub fn load_templates(&mut self, text: &str) -> Vec<CodecError> {
        let (library, errors) = TemplateLibrary::from_text(text);
        self.templates = library;
        self.template_index = 0;
        errors
    }

    /// Add the active puzzle's layout to the template library
    ///
    /// # Errors
    /// Returns `SessionError::NoDocument` when no puzzle is open.
    pub fn save_as_template(&mut self) -> Result<()> {
        let mut template = PuzzleDocument::from_template(self.active()?);
        template.refresh_name();
        self.templates.insert(template);
        Ok(())
    }

    /// Template currently selected for browsing
    #[must_use]
    pub fn current_template(&self) -> Option<&PuzzleDocument> {
        self.templates.get(self.template_index)
    }

    /// Step to the next or previous template, wrapping around
    ///
    /// # Errors
    /// Returns `SessionError::NoTemplates` if the library is empty.
    pub fn next_template(&mut self, forward: bool) -> Result<&PuzzleDocument> {
        let index = self
            .templates
            .next(self.template_index, forward)
            .ok_or(SessionError::NoTemplates)?;
        self.template_index = index;
        self.templates.get(index).ok_or(SessionError::NoTemplates)
    }

    /// Open a new puzzle on the selected template's layout
    ///
    /// # Errors
    /// Returns `SessionError::NoTemplates` if the library is empty.
    pub fn start_from_template(&mut self) -> Result<&PuzzleDocument> {
        let doc = self
            .current_template()
            .map(PuzzleDocument::from_template)
            .ok_or(SessionError::NoTemplates)?;
        log::debug!("Starting puzzle from template '{}'", doc.name());
        Ok(self.document.insert(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::write_template;
    use crate::matcher::Dictionary;

    fn session() -> Session {
        let short = Dictionary::from_lines(["CRANE", "CRATE", "CRAZE", "CAT", "COT"]);
        let long = Dictionary::from_lines(["CRANE", "CRATE", "CRAZE", "BANAL", "CAT", "COT"]);
        Session::new(Arc::new(DictionaryIndex::new(short, long)))
    }

    #[test]
    fn calls_without_document_fail() {
        let mut session = session();
        assert_eq!(
            session.toggle_blocked(Position::new(0, 0)),
            Err(SessionError::NoDocument)
        );
        assert_eq!(session.serialize(), Err(SessionError::NoDocument));
        assert!(session.derive_clues().is_err());
        assert!(session.renumber().is_err());
    }

    #[test]
    fn edit_and_reload() {
        let mut session = session();
        session.new_grid(5, 5).unwrap();
        assert_eq!(session.toggle_blocked(Position::new(0, 0)).unwrap(), 2);
        session.fill_word(1, Direction::Across, "rate").unwrap();
        assert!(session.set_clue_text(Direction::Across, 1, "Speed").unwrap());

        let text = session.serialize().unwrap();
        let before = session.document().cloned();

        session.new_grid(3, 3).unwrap();
        session.deserialize(&text).unwrap();
        assert_eq!(session.document().cloned(), before);
    }

    #[test]
    fn failed_calls_keep_state() {
        let mut session = session();
        session.new_grid(4, 4).unwrap();
        let before = session.document().cloned();

        assert!(matches!(
            session.toggle_blocked(Position::new(4, 0)),
            Err(SessionError::Grid(GridError::OutOfRange(_)))
        ));
        assert!(session.new_grid(2, 2).is_err());
        assert!(matches!(
            session.deserialize("broken"),
            Err(SessionError::Codec(_))
        ));
        assert_eq!(session.document().cloned(), before);
    }

    #[test]
    fn find_matches_selects_dictionary() {
        let session = session();
        let texts = |words: Vec<&Word>| -> Vec<String> {
            words.iter().map(|w| w.text().to_string()).collect()
        };
        assert_eq!(texts(session.find_matches("cr_ze", false, false)), vec!["CRAZE"]);
        assert!(session.find_matches("#@#@#", false, true).is_empty());
        assert_eq!(texts(session.find_matches("#@#@#", true, true)), vec!["BANAL"]);
        assert!(session.find_matches("", true, false).is_empty());
    }

    #[test]
    fn suggest_uses_slot_letters() {
        let mut session = session();
        session.new_grid(3, 3).unwrap();
        session.fill_letter(Position::new(0, 0), 'c').unwrap();
        session.fill_letter(Position::new(0, 2), 't').unwrap();

        let (pattern, words) = session.suggest(1, Direction::Across, false, false).unwrap();
        assert_eq!(pattern, "c_t");
        let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["CAT", "COT"]);

        assert!(matches!(
            session.suggest(5, Direction::Down, false, false),
            Err(SessionError::Grid(GridError::UnknownSlot { .. }))
        ));
    }

    #[test]
    fn template_browsing() {
        let mut session = session();
        assert_eq!(session.next_template(true), Err(SessionError::NoTemplates));

        let mut narrow = PuzzleDocument::blank(3, 3).unwrap();
        narrow.toggle_blocked(Position::new(1, 1)).unwrap();
        let wide = PuzzleDocument::blank(5, 5).unwrap();
        let text = format!("{}{}", write_template(&wide), write_template(&narrow));

        assert!(session.load_templates(&text).is_empty());
        assert_eq!(session.current_template().map(PuzzleDocument::width), Some(3));
        assert_eq!(session.next_template(true).unwrap().width(), 5);
        assert_eq!(session.next_template(true).unwrap().width(), 3);
        assert_eq!(session.next_template(false).unwrap().width(), 5);

        let doc = session.start_from_template().unwrap();
        assert_eq!(doc.width(), 5);
        assert_eq!(doc.name(), "5 x 5 (Hard)");
    }

    #[test]
    fn save_as_template_drops_letters() {
        let mut session = session();
        session.new_grid(3, 3).unwrap();
        session.fill_word(1, Direction::Across, "cat").unwrap();
        session.save_as_template().unwrap();

        let template = session.templates().get(0).unwrap();
        assert!(template.grid().cells().iter().all(|c| c.letter().is_none()));
    }
}
