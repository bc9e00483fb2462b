mod study_vm;

pub use study_vm::{CardFace, StudyIntent, StudyVm, start_study};
