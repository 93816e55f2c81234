mod grid;
mod operator;
mod problem;
mod settings;

pub use grid::{GridRange, MAX_GRID_SPAN, RangeError};
pub use operator::{Operator, OperatorError, OperatorSet};
pub use problem::Problem;
pub use settings::{
    MAX_OPERAND, MAX_PROBLEMS, PracticeDefaults, ProblemSettings, ProblemSettingsDraft,
    SettingsError,
};
