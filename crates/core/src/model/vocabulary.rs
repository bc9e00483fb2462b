use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::builtin::BUILTIN_ENTRIES;
use crate::model::entry::{EntryError, VocabularyEntry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("invalid entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: EntryError,
    },

    #[error("duplicate term {term:?}")]
    DuplicateTerm { term: String },
}

/// The fixed table of entries a session is drawn from.
///
/// Terms are unique: the starred set is keyed by term, so two entries sharing a
/// term could not be starred independently. Cloning is cheap; the entries are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Arc<[VocabularyEntry]>,
}

impl Vocabulary {
    /// Build a vocabulary from already validated entries.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::DuplicateTerm` if two entries share a term.
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, VocabularyError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.term()) {
                return Err(VocabularyError::DuplicateTerm {
                    term: entry.term().to_owned(),
                });
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Build a vocabulary from raw `(term, definition)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::InvalidEntry` for blank text and
    /// `VocabularyError::DuplicateTerm` for repeated terms.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, VocabularyError> {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (term, definition))| {
                VocabularyEntry::new(term, definition)
                    .map_err(|source| VocabularyError::InvalidEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    /// The table shipped with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the compiled-in table itself is malformed.
    pub fn builtin() -> Result<Self, VocabularyError> {
        Self::from_pairs(BUILTIN_ENTRIES.iter().copied())
    }

    #[must_use]
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
