/// Where a batch is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    /// Nothing generated yet.
    Idle,
    /// A fresh batch with no correct answers.
    Running,
    /// At least one problem solved, at least one left.
    InProgress,
    /// Every problem solved; the stopwatch is paused.
    Completed,
}

/// Aggregated view of batch progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProgress {
    pub total: usize,
    pub solved: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Result of submitting an answer to one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Input held nothing numeric after normalization.
    Ignored,
    Incorrect,
    /// The problem was already solved; nothing changed.
    AlreadySolved,
    Correct {
        /// Next problem in batch order, if any.
        next: Option<usize>,
        step_ms: u64,
        completed: bool,
    },
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }
}
