use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use drill_core::input;
use drill_core::model::{
    Operator, OperatorError, PracticeDefaults, Problem, ProblemSettings, ProblemSettingsDraft,
};
use drill_core::Stopwatch;

use crate::error::{GenerateError, SubmitError};
use super::generator::draw_batch;
use super::progress::{AnswerOutcome, BatchPhase, BatchProgress};

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Generates batches of practice problems, judges answers and times the run.
///
/// Problems are solved in batch order; each correct answer records the
/// stopwatch reading and the time spent since the previous solve. When the
/// last problem is solved the stopwatch pauses and the batch is complete.
pub struct ProblemEngine {
    draft: ProblemSettingsDraft,
    problems: Vec<Problem>,
    stopwatch: Stopwatch,
    last_solved_ms: Option<u64>,
    rng: StdRng,
}

impl ProblemEngine {
    /// Create an engine seeded from the thread RNG.
    #[must_use]
    pub fn new(settings: ProblemSettings) -> Self {
        Self {
            draft: settings.into(),
            problems: Vec::new(),
            stopwatch: Stopwatch::new(),
            last_solved_ms: None,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create an engine from startup defaults, honouring a fixed seed.
    #[must_use]
    pub fn from_defaults(defaults: &PracticeDefaults) -> Self {
        let engine = Self::new(defaults.problems);
        match defaults.seed {
            Some(seed) => engine.with_seed(seed),
            None => engine,
        }
    }

    /// Reseed the RNG for reproducible batches.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ─── Settings ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn draft(&self) -> &ProblemSettingsDraft {
        &self.draft
    }

    pub fn set_count(&mut self, count: Option<u32>) {
        self.draft.count = count;
    }

    pub fn set_min(&mut self, min: Option<i64>) {
        self.draft.min = min;
    }

    pub fn set_max(&mut self, max: Option<i64>) {
        self.draft.max = max;
    }

    /// Store a typed count. Text without digits (or beyond `u32`) is kept as
    /// "not a number" and rejected at the next `generate`.
    pub fn set_count_input(&mut self, raw: &str) {
        let count = input::parse_whole(raw)
            .ok()
            .and_then(|value| u32::try_from(value).ok());
        self.set_count(count);
    }

    pub fn set_min_input(&mut self, raw: &str) {
        self.set_min(input::parse_bound(raw).ok());
    }

    pub fn set_max_input(&mut self, raw: &str) {
        self.set_max(input::parse_bound(raw).ok());
    }

    /// Turn an operator on or off.
    ///
    /// # Errors
    ///
    /// Returns `OperatorError::EmptySet` if it is the last one selected.
    pub fn toggle_operator(&mut self, operator: Operator) -> Result<(), OperatorError> {
        self.draft.operators.toggle(operator)
    }

    // ─── Batch lifecycle ─────────────────────────────────────────────────────

    /// Replace the batch with freshly drawn problems and restart the stopwatch.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Settings` for an invalid draft and
    /// `GenerateError::NoDivisor` if only division is allowed over `[0, 1)`.
    /// The current batch and stopwatch are left untouched on error.
    pub fn generate(&mut self) -> Result<&[Problem], GenerateError> {
        let settings = self.draft.validate().inspect_err(|err| {
            warn!(%err, "rejected problem settings");
        })?;
        let problems = draw_batch(&mut self.rng, &settings)?;

        debug!(
            count = problems.len(),
            min = settings.min(),
            max = settings.max(),
            operators = %settings.operators().symbols(),
            "generated problem batch"
        );

        self.problems = problems;
        self.last_solved_ms = None;
        self.stopwatch.reset();
        self.stopwatch.start();
        Ok(&self.problems)
    }

    /// Judge `value` against problem `index`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::NoBatch` before the first `generate` and
    /// `SubmitError::OutOfRange` for an index past the batch.
    pub fn submit_answer(&mut self, index: usize, value: f64) -> Result<AnswerOutcome, SubmitError> {
        self.ensure_index(index)?;
        if self.problems[index].passed() {
            return Ok(AnswerOutcome::AlreadySolved);
        }

        // Typing into a problem resumes a manually paused run.
        self.stopwatch.resume();

        if !self.problems[index].check(value) {
            return Ok(AnswerOutcome::Incorrect);
        }

        let now = self.stopwatch.elapsed_ms();
        let step_ms = now.saturating_sub(self.last_solved_ms.unwrap_or(0));
        self.problems[index].record_solve(now, step_ms);
        self.last_solved_ms = Some(now);

        let completed = self.problems.iter().all(Problem::passed);
        if completed {
            self.stopwatch.pause();
            info!(
                total = self.problems.len(),
                elapsed_ms = now,
                "problem batch completed"
            );
        }

        Ok(AnswerOutcome::Correct {
            next: self.next_index(index),
            step_ms,
            completed,
        })
    }

    /// Normalize a raw keystroke buffer and submit it.
    ///
    /// Input with nothing numeric in it is [`AnswerOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Same as [`ProblemEngine::submit_answer`].
    pub fn submit_input(&mut self, index: usize, raw: &str) -> Result<AnswerOutcome, SubmitError> {
        self.ensure_index(index)?;
        match input::parse_answer(raw) {
            Ok(value) => self.submit_answer(index, value),
            Err(_) => Ok(AnswerOutcome::Ignored),
        }
    }

    /// Advance the stopwatch by one tick and return the elapsed time.
    pub fn tick(&mut self) -> u64 {
        self.stopwatch.tick()
    }

    /// Pause or resume the run. Ignored once the batch is complete.
    pub fn toggle_pause(&mut self) {
        if self.phase() != BatchPhase::Completed {
            self.stopwatch.toggle();
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.stopwatch.elapsed_ms()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    #[must_use]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// The problem that should receive focus after `index`.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        (next < self.problems.len()).then_some(next)
    }

    #[must_use]
    pub fn phase(&self) -> BatchPhase {
        let solved = self.solved_count();
        if self.problems.is_empty() {
            BatchPhase::Idle
        } else if solved == self.problems.len() {
            BatchPhase::Completed
        } else if solved == 0 {
            BatchPhase::Running
        } else {
            BatchPhase::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == BatchPhase::Completed
    }

    #[must_use]
    pub fn progress(&self) -> BatchProgress {
        let solved = self.solved_count();
        BatchProgress {
            total: self.problems.len(),
            solved,
            remaining: self.problems.len() - solved,
            is_complete: self.is_complete(),
        }
    }

    /// Display form of a solved problem's answer.
    #[must_use]
    pub fn answer_label(&self, index: usize) -> Option<String> {
        self.problems
            .get(index)
            .filter(|problem| problem.passed())
            .map(Problem::answer_label)
    }

    fn solved_count(&self) -> usize {
        self.problems.iter().filter(|problem| problem.passed()).count()
    }

    fn ensure_index(&self, index: usize) -> Result<(), SubmitError> {
        if self.problems.is_empty() {
            return Err(SubmitError::NoBatch);
        }
        if index >= self.problems.len() {
            return Err(SubmitError::OutOfRange {
                index,
                len: self.problems.len(),
            });
        }
        Ok(())
    }
}

impl Default for ProblemEngine {
    fn default() -> Self {
        Self::new(ProblemSettings::default())
    }
}
