#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod problems;

pub use drill_core::{Stopwatch, TICK_MS};

pub use error::{GenerateError, GridError, SubmitError};
pub use grid::{CellOutcome, GridValidator};
pub use problems::{AnswerOutcome, BatchPhase, BatchProgress, ProblemEngine};
