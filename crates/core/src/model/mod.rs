mod entry;
mod session;
mod starred;
mod vocabulary;

pub use entry::{EntryError, VocabularyEntry};
pub use session::{Position, SessionState};
pub use starred::StarredSet;
pub use vocabulary::{Vocabulary, VocabularyError};
