use std::fmt;

use crate::model::{StarredSet, VocabularyEntry};

//
// ─── POSITION ──────────────────────────────────────────────────────────────────
//

/// Where the displayed card sits inside the active list.
///
/// `index` is zero-based and always `< count`, except for the empty list where
/// both are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    index: usize,
    count: usize,
}

impl Position {
    #[must_use]
    pub fn new(cursor: usize, count: usize) -> Self {
        if count == 0 {
            return Self::empty();
        }
        Self {
            index: cursor % count,
            count,
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { index: 0, count: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            f.write_str("0 of 0")
        } else {
            write!(f, "{} of {}", self.index + 1, self.count)
        }
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// View state of a review session.
///
/// The starred set is kept outside so it can outlive reshuffles; every query that
/// depends on the active list borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    order: Vec<VocabularyEntry>,
    position: usize,
    only_starred: bool,
    revealed: bool,
}

impl SessionState {
    /// Start a session over `order`, which should be a permutation of the vocabulary.
    #[must_use]
    pub fn new(order: Vec<VocabularyEntry>) -> Self {
        Self {
            order,
            position: 0,
            only_starred: false,
            revealed: false,
        }
    }

    #[must_use]
    pub fn order(&self) -> &[VocabularyEntry] {
        &self.order
    }

    /// Raw cursor. Not reset by filter changes, so it may exceed the active length.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn only_starred(&self) -> bool {
        self.only_starred
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Entries currently in rotation, in shuffled order.
    #[must_use]
    pub fn active_entries<'a>(&'a self, starred: &StarredSet) -> Vec<&'a VocabularyEntry> {
        self.order
            .iter()
            .filter(|entry| !self.only_starred || starred.contains(entry.term()))
            .collect()
    }

    #[must_use]
    pub fn active_len(&self, starred: &StarredSet) -> usize {
        if self.only_starred {
            self.order
                .iter()
                .filter(|entry| starred.contains(entry.term()))
                .count()
        } else {
            self.order.len()
        }
    }

    /// The displayed entry, or `None` when the active list is empty.
    #[must_use]
    pub fn current<'a>(&'a self, starred: &StarredSet) -> Option<&'a VocabularyEntry> {
        let active = self.active_entries(starred);
        let index = self.position % active.len().max(1);
        active.get(index).copied()
    }

    #[must_use]
    pub fn position(&self, starred: &StarredSet) -> Position {
        Position::new(self.position, self.active_len(starred))
    }

    /// Step to the next card and hide the definition.
    ///
    /// Does nothing when the active list is empty.
    pub fn advance(&mut self, starred: &StarredSet) {
        let len = self.active_len(starred);
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
        self.revealed = false;
    }

    /// Replace the order wholesale and return to the first card.
    pub fn reshuffle(&mut self, order: Vec<VocabularyEntry>) {
        self.order = order;
        self.position = 0;
        self.revealed = false;
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Switch the starred-only filter. The cursor is kept as is.
    pub fn set_only_starred(&mut self, only_starred: bool) {
        self.only_starred = only_starred;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
