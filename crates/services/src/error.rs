//! Shared error types for the services crate.

use thiserror::Error;

use vocab_core::model::VocabularyError;

/// Errors emitted while building study services.
///
/// Session transitions themselves are total; only setup can fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}
