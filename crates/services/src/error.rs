//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::input::InputError;
use drill_core::model::{RangeError, SettingsError};

/// Errors emitted by `ProblemEngine::generate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("division is the only operator and the range holds no non-zero divisor")]
    NoDivisor,
}

/// Errors emitted when submitting an answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("no batch has been generated")]
    NoBatch,
    #[error("problem index {index} is out of range for a batch of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Errors emitted by `GridValidator` range updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
