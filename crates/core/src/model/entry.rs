use thiserror::Error;

//
// ─── ENTRY ERRORS ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("term cannot be empty")]
    EmptyTerm,

    #[error("definition for {term:?} cannot be empty")]
    EmptyDefinition { term: String },
}

//
// ─── VOCABULARY ENTRY ──────────────────────────────────────────────────────────
//

/// A single (term, definition) pair shown on one flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VocabularyEntry {
    term: String,
    definition: String,
}

impl VocabularyEntry {
    /// Build an entry from raw text. Both sides are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyTerm` or `EntryError::EmptyDefinition` when a side is blank.
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let term = term.into().trim().to_owned();
        if term.is_empty() {
            return Err(EntryError::EmptyTerm);
        }

        let definition = definition.into().trim().to_owned();
        if definition.is_empty() {
            return Err(EntryError::EmptyDefinition { term });
        }

        Ok(Self { term, definition })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
