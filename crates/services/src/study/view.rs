use vocab_core::model::Position;

/// Presentation-agnostic picture of the displayed card.
///
/// This is intentionally **not** a UI view-model: the UI decides what to show
/// from `revealed` and how to label the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    pub revealed: bool,
    pub starred: bool,
    pub only_starred: bool,
    pub position: Position,
    pub starred_count: usize,
    pub total: usize,
}
