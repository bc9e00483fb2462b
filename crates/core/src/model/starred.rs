use std::collections::HashSet;

/// Terms the learner has starred. Survives reshuffles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarredSet {
    terms: HashSet<String>,
}

impl StarredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `term` if absent, remove it otherwise.
    ///
    /// Returns `true` when the term is starred after the call.
    pub fn toggle(&mut self, term: &str) -> bool {
        if self.terms.remove(term) {
            false
        } else {
            self.terms.insert(term.to_owned());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
