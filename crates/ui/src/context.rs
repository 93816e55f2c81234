use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use drill_core::model::PracticeDefaults;
use services::{GridValidator, ProblemEngine};

use crate::vm::{ProblemSheetVm, TimesTableVm};

pub trait UiApp: Send + Sync {
    fn defaults(&self) -> PracticeDefaults;
    fn generate_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    defaults: PracticeDefaults,
    generate_on_launch_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            defaults: app.defaults(),
            generate_on_launch_once: Arc::new(AtomicBool::new(app.generate_on_launch())),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> PracticeDefaults {
        self.defaults
    }

    /// True exactly once when the app was launched with a batch ready to go.
    #[must_use]
    pub fn take_generate_on_launch(&self) -> bool {
        self.generate_on_launch_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn problem_sheet(&self) -> ProblemSheetVm {
        ProblemSheetVm::new(ProblemEngine::from_defaults(&self.defaults))
    }

    #[must_use]
    pub fn times_table(&self) -> TimesTableVm {
        TimesTableVm::new(GridValidator::new(self.defaults.grid))
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
