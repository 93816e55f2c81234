use drill_core::model::{Operator, OperatorError};
use services::{AnswerOutcome, BatchPhase, GenerateError, ProblemEngine};

use super::time_fmt::format_elapsed;

/// Visual state of a single answer field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Blank,
    Correct,
    Incorrect,
}

impl Feedback {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Feedback::Blank => "",
            Feedback::Correct => "answer--ok",
            Feedback::Incorrect => "answer--bad",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRowVm {
    pub index: usize,
    pub input_id: String,
    pub prompt: String,
    pub entry: String,
    pub feedback: Feedback,
    pub step_label: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorToggleVm {
    pub operator: Operator,
    pub name: &'static str,
    pub checked: bool,
}

#[must_use]
pub fn problem_input_id(index: usize) -> String {
    format!("problem-{index}")
}

/// Screen state for the problem generator: the engine plus what the user has
/// typed into each field.
pub struct ProblemSheetVm {
    engine: ProblemEngine,
    count_text: String,
    min_text: String,
    max_text: String,
    entries: Vec<String>,
    feedback: Vec<Feedback>,
    error: Option<String>,
}

impl ProblemSheetVm {
    #[must_use]
    pub fn new(engine: ProblemEngine) -> Self {
        let draft = *engine.draft();
        let text = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_default();
        Self {
            count_text: text(draft.count.map(i64::from)),
            min_text: text(draft.min),
            max_text: text(draft.max),
            entries: Vec::new(),
            feedback: Vec::new(),
            error: None,
            engine,
        }
    }

    #[must_use]
    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    #[must_use]
    pub fn min_text(&self) -> &str {
        &self.min_text
    }

    #[must_use]
    pub fn max_text(&self) -> &str {
        &self.max_text
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_count_text(&mut self, raw: String) {
        self.engine.set_count_input(&raw);
        self.count_text = raw;
    }

    pub fn set_min_text(&mut self, raw: String) {
        self.engine.set_min_input(&raw);
        self.min_text = raw;
    }

    pub fn set_max_text(&mut self, raw: String) {
        self.engine.set_max_input(&raw);
        self.max_text = raw;
    }

    pub fn toggle_operator(&mut self, operator: Operator) {
        self.error = match self.engine.toggle_operator(operator) {
            Ok(()) => None,
            Err(OperatorError::EmptySet) => Some("Pick at least one type of problem.".to_string()),
            Err(err) => Some(err.to_string()),
        };
    }

    #[must_use]
    pub fn operator_toggles(&self) -> Vec<OperatorToggleVm> {
        let selected = self.engine.draft().operators;
        Operator::ALL
            .into_iter()
            .map(|operator| OperatorToggleVm {
                operator,
                name: operator.name(),
                checked: selected.contains(operator),
            })
            .collect()
    }

    #[must_use]
    pub fn shows_division_hint(&self) -> bool {
        self.engine.draft().operators.contains(Operator::Divide)
    }

    /// # Errors
    ///
    /// Returns the engine's `GenerateError`; the current sheet is kept.
    pub fn generate(&mut self) -> Result<(), GenerateError> {
        match self.engine.generate() {
            Ok(problems) => {
                let len = problems.len();
                self.entries = vec![String::new(); len];
                self.feedback = vec![Feedback::Blank; len];
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Record typed text for a problem and judge it. Returns the index that
    /// should receive focus next.
    pub fn input(&mut self, index: usize, raw: String) -> Option<usize> {
        let outcome = self.engine.submit_input(index, &raw).ok()?;
        let (entry, feedback) = (self.entries.get_mut(index)?, self.feedback.get_mut(index)?);
        match outcome {
            AnswerOutcome::Ignored => {
                *entry = raw;
                *feedback = Feedback::Blank;
                None
            }
            AnswerOutcome::Incorrect => {
                *entry = raw;
                *feedback = Feedback::Incorrect;
                None
            }
            AnswerOutcome::AlreadySolved => None,
            AnswerOutcome::Correct { next, .. } => {
                *entry = self.engine.answer_label(index).unwrap_or(raw);
                *feedback = Feedback::Correct;
                next
            }
        }
    }

    pub fn tick(&mut self) {
        self.engine.tick();
    }

    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.engine.is_timer_running()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.engine.phase() == BatchPhase::Completed
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format_elapsed(self.engine.elapsed_ms())
    }

    #[must_use]
    pub fn rows(&self) -> Vec<ProblemRowVm> {
        self.engine
            .problems()
            .iter()
            .enumerate()
            .map(|(index, problem)| ProblemRowVm {
                index,
                input_id: problem_input_id(index),
                prompt: problem.to_string(),
                entry: self.entries.get(index).cloned().unwrap_or_default(),
                feedback: self.feedback.get(index).copied().unwrap_or_default(),
                step_label: problem.step_ms().map(format_elapsed),
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &ProblemEngine {
        &self.engine
    }
}
