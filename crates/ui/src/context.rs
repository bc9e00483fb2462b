use std::sync::Arc;

use services::StudyLoopService;

pub trait UiApp: Send + Sync {
    fn study_loop(&self) -> Arc<StudyLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    study_loop: Arc<StudyLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            study_loop: app.study_loop(),
        }
    }

    #[must_use]
    pub fn study_loop(&self) -> Arc<StudyLoopService> {
        Arc::clone(&self.study_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
