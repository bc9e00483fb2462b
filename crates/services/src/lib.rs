#![forbid(unsafe_code)]

pub mod error;
pub mod shuffle;
pub mod study;

pub use error::StudyError;
pub use shuffle::permutation;
pub use study::{CardSnapshot, StudyLoopService, StudySession};
