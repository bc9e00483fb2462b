mod session;
mod view;
mod workflow;

// Public API of the study subsystem.
pub use crate::error::StudyError;
pub use session::StudySession;
pub use view::CardSnapshot;
pub use workflow::StudyLoopService;
