use rand::rngs::StdRng;

use vocab_core::model::{Position, SessionState, StarredSet, Vocabulary, VocabularyEntry};

use super::view::CardSnapshot;
use crate::shuffle::permutation;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory review session over a fixed vocabulary.
///
/// Owns the session state, the starred set and the random source used for
/// reshuffles. Every operation is total: an empty active list turns transitions
/// into no-ops and queries into empty text and a `"0 of 0"` position.
pub struct StudySession {
    vocabulary: Vocabulary,
    state: SessionState,
    starred: StarredSet,
    rng: StdRng,
}

impl StudySession {
    /// Start a session with a fresh permutation drawn from `rng`.
    #[must_use]
    pub fn new(vocabulary: Vocabulary, mut rng: StdRng) -> Self {
        let order = permutation(vocabulary.entries(), &mut rng);
        log::debug!("session started with {} entries", order.len());
        Self {
            vocabulary,
            state: SessionState::new(order),
            starred: StarredSet::new(),
            rng,
        }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn starred(&self) -> &StarredSet {
        &self.starred
    }

    /// The displayed entry, `None` when the active list is empty.
    #[must_use]
    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.state.current(&self.starred)
    }

    /// Entries in rotation, in shuffled order.
    #[must_use]
    pub fn active_entries(&self) -> Vec<&VocabularyEntry> {
        self.state.active_entries(&self.starred)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.state.position(&self.starred)
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    #[must_use]
    pub fn only_starred(&self) -> bool {
        self.state.only_starred()
    }

    #[must_use]
    pub fn is_starred(&self, term: &str) -> bool {
        self.starred.contains(term)
    }

    /// Term or definition of the displayed card. Empty when there is no card.
    #[must_use]
    pub fn displayed_text(&self) -> &str {
        match self.current() {
            Some(entry) if self.state.is_revealed() => entry.definition(),
            Some(entry) => entry.term(),
            None => "",
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            revealed: self.state.is_revealed(),
            starred: self
                .current()
                .is_some_and(|entry| self.starred.contains(entry.term())),
            only_starred: self.state.only_starred(),
            position: self.position(),
            starred_count: self.starred.len(),
            total: self.vocabulary.len(),
        }
    }

    /// Move to the next card in the active list and hide the definition.
    pub fn advance(&mut self) {
        self.state.advance(&self.starred);
        log::debug!("advance -> {}", self.position());
    }

    /// Draw a new permutation, go back to the first card and hide the definition.
    ///
    /// Starred terms are kept.
    pub fn reshuffle(&mut self) {
        let order = permutation(self.vocabulary.entries(), &mut self.rng);
        self.state.reshuffle(order);
        log::debug!(
            "reshuffle -> {} ({} starred kept)",
            self.position(),
            self.starred.len()
        );
    }

    pub fn toggle_reveal(&mut self) {
        self.state.toggle_reveal();
        log::debug!("reveal -> {}", self.state.is_revealed());
    }

    /// Star `term` if it is not starred, unstar it otherwise.
    ///
    /// Returns whether the term is starred afterwards.
    pub fn toggle_star(&mut self, term: &str) -> bool {
        let starred = self.starred.toggle(term);
        log::debug!("star {term:?} -> {starred}");
        starred
    }

    /// Toggle the star on the displayed card. No-op when there is no card.
    pub fn toggle_current_star(&mut self) -> Option<bool> {
        let term = self.current()?.term().to_owned();
        Some(self.toggle_star(&term))
    }

    /// Switch the starred-only filter.
    ///
    /// The cursor is not reset, so the displayed card may jump to a different entry.
    pub fn set_only_starred(&mut self, only_starred: bool) {
        self.state.set_only_starred(only_starred);
        log::debug!("only starred -> {only_starred} ({})", self.position());
    }
}
