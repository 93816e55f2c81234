mod engine;
mod generator;
mod progress;

// Public API of the problem subsystem.
pub use crate::error::{GenerateError, SubmitError};
pub use engine::ProblemEngine;
pub use progress::{AnswerOutcome, BatchPhase, BatchProgress};
