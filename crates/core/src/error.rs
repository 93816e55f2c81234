use thiserror::Error;

use crate::input::InputError;
use crate::model::{OperatorError, RangeError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Operator(#[from] OperatorError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
