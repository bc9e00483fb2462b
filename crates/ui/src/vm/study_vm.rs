use services::{CardSnapshot, StudyLoopService, StudySession};

/// User actions the study view can dispatch.
///
/// `Flip` only ever comes from the card body. Controls drawn on top of the card
/// (the star) stop propagation so a click on them never reaches the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyIntent {
    Flip,
    ToggleStar,
    Next,
    Reshuffle,
    SetOnlyStarred(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    Term,
    Definition,
}

pub struct StudyVm {
    session: StudySession,
}

impl StudyVm {
    #[must_use]
    pub fn new(session: StudySession) -> Self {
        Self { session }
    }

    pub fn apply(&mut self, intent: StudyIntent) {
        match intent {
            StudyIntent::Flip => self.session.toggle_reveal(),
            StudyIntent::ToggleStar => {
                // No-op when the starred-only filter hides every card.
                self.session.toggle_current_star();
            }
            StudyIntent::Next => self.session.advance(),
            StudyIntent::Reshuffle => self.session.reshuffle(),
            StudyIntent::SetOnlyStarred(flag) => self.session.set_only_starred(flag),
        }
    }

    #[must_use]
    pub fn session(&self) -> &StudySession {
        &self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> CardSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.session.is_revealed() {
            CardFace::Definition
        } else {
            CardFace::Term
        }
    }

    #[must_use]
    pub fn face_text(&self) -> &str {
        self.session.displayed_text()
    }

    /// False while the starred-only filter hides every card.
    #[must_use]
    pub fn has_card(&self) -> bool {
        self.session.current().is_some()
    }

    #[must_use]
    pub fn is_current_starred(&self) -> bool {
        self.session
            .current()
            .is_some_and(|entry| self.session.is_starred(entry.term()))
    }

    #[must_use]
    pub fn only_starred(&self) -> bool {
        self.session.only_starred()
    }

    /// Indicator text, `"3 of 30"` or `"0 of 0"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        self.session.position().to_string()
    }
}

#[must_use]
pub fn start_study(study_loop: &StudyLoopService) -> StudyVm {
    StudyVm::new(study_loop.start_session())
}
