use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{GridRange, OperatorSet};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("number of problems is not a number")]
    CountNotANumber,

    #[error("number of problems must be > 0")]
    ZeroCount,

    #[error("range bound is not a number")]
    BoundNotANumber,

    #[error("range minimum ({min}) must be below maximum ({max})")]
    InvertedRange { min: i64, max: i64 },

    #[error("number of problems must be at most {max}")]
    TooManyProblems { max: u32 },

    #[error("range bound {value} is outside -{limit}..={limit}")]
    BoundOutOfRange { value: i64, limit: i64 },
}

/// Largest batch a single `generate` call may produce.
pub const MAX_PROBLEMS: u32 = 1_000;

/// Largest operand magnitude. Products stay exact in `f64` at two decimals.
pub const MAX_OPERAND: i64 = 1_000_000;

/// Validated settings for generating a batch of problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSettings {
    count: u32,
    min: i64,
    max: i64,
    operators: OperatorSet,
}

impl ProblemSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroCount` for an empty batch,
    /// `SettingsError::TooManyProblems` above [`MAX_PROBLEMS`],
    /// `SettingsError::BoundOutOfRange` for a bound beyond [`MAX_OPERAND`],
    /// and `SettingsError::InvertedRange` unless `min < max`.
    pub fn new(
        count: u32,
        min: i64,
        max: i64,
        operators: OperatorSet,
    ) -> Result<Self, SettingsError> {
        if count == 0 {
            return Err(SettingsError::ZeroCount);
        }
        if count > MAX_PROBLEMS {
            return Err(SettingsError::TooManyProblems { max: MAX_PROBLEMS });
        }
        for value in [min, max] {
            if !(-MAX_OPERAND..=MAX_OPERAND).contains(&value) {
                return Err(SettingsError::BoundOutOfRange {
                    value,
                    limit: MAX_OPERAND,
                });
            }
        }
        if min >= max {
            return Err(SettingsError::InvertedRange { min, max });
        }
        Ok(Self {
            count,
            min,
            max,
            operators,
        })
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Inclusive lower bound for operands.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Exclusive upper bound for operands.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    #[must_use]
    pub fn operators(&self) -> OperatorSet {
        self.operators
    }
}

impl Default for ProblemSettings {
    fn default() -> Self {
        Self {
            count: 10,
            min: 1,
            max: 10,
            operators: OperatorSet::default(),
        }
    }
}

/// Raw, possibly invalid settings as typed by the user.
///
/// `None` marks a field whose text held no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemSettingsDraft {
    pub count: Option<u32>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub operators: OperatorSet,
}

impl ProblemSettingsDraft {
    /// Validate the draft into settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` describing the first invalid field.
    pub fn validate(self) -> Result<ProblemSettings, SettingsError> {
        let count = self.count.ok_or(SettingsError::CountNotANumber)?;
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return Err(SettingsError::BoundNotANumber);
        };
        ProblemSettings::new(count, min, max, self.operators)
    }
}

impl From<ProblemSettings> for ProblemSettingsDraft {
    fn from(settings: ProblemSettings) -> Self {
        Self {
            count: Some(settings.count),
            min: Some(settings.min),
            max: Some(settings.max),
            operators: settings.operators,
        }
    }
}

/// Startup defaults for both practice widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeDefaults {
    pub problems: ProblemSettings,
    pub grid: GridRange,
    /// Fixed RNG seed for reproducible batches.
    pub seed: Option<u64>,
}

impl PracticeDefaults {
    /// Build defaults from loosely typed values, validating both widgets.
    ///
    /// # Errors
    ///
    /// Returns `crate::Error` if either the problem settings or the grid
    /// range are invalid.
    pub fn from_parts(
        problems: ProblemSettingsDraft,
        grid_min: u32,
        grid_max: u32,
        seed: Option<u64>,
    ) -> Result<Self, crate::Error> {
        let problems = problems.validate()?;
        let grid = GridRange::new(i64::from(grid_min), i64::from(grid_max))?;
        Ok(Self {
            problems,
            grid,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_missing_bound_is_rejected() {
        let mut draft = ProblemSettingsDraft::from(ProblemSettings::default());
        draft.max = None;
        assert_eq!(draft.validate(), Err(SettingsError::BoundNotANumber));
    }

    #[test]
    fn inverted_or_equal_range_is_rejected() {
        let ops = OperatorSet::default();
        assert_eq!(
            ProblemSettings::new(5, 4, 4, ops),
            Err(SettingsError::InvertedRange { min: 4, max: 4 })
        );
        assert_eq!(
            ProblemSettings::new(0, 1, 4, ops),
            Err(SettingsError::ZeroCount)
        );
        assert!(ProblemSettings::new(1, -3, 4, ops).is_ok());
    }

    #[test]
    fn oversized_batches_and_operands_are_rejected() {
        let ops = OperatorSet::default();
        assert_eq!(
            ProblemSettings::new(4_000_000_000, 1, 10, ops),
            Err(SettingsError::TooManyProblems { max: MAX_PROBLEMS })
        );
        assert!(ProblemSettings::new(MAX_PROBLEMS, 1, 10, ops).is_ok());

        assert_eq!(
            ProblemSettings::new(1, i64::MAX / 2, i64::MAX, ops),
            Err(SettingsError::BoundOutOfRange {
                value: i64::MAX / 2,
                limit: MAX_OPERAND
            })
        );
        assert!(ProblemSettings::new(1, -MAX_OPERAND, MAX_OPERAND, ops).is_ok());
    }

    #[test]
    fn defaults_match_the_practice_page() {
        let defaults = PracticeDefaults::default();
        assert_eq!(defaults.problems.count(), 10);
        assert_eq!((defaults.problems.min(), defaults.problems.max()), (1, 10));
        assert_eq!((defaults.grid.min(), defaults.grid.max()), (0, 10));
    }

    #[test]
    fn from_parts_reports_grid_errors() {
        let draft = ProblemSettingsDraft::from(ProblemSettings::default());
        let err = PracticeDefaults::from_parts(draft, 5, 3, None).unwrap_err();
        assert!(matches!(err, crate::Error::Range(_)));
    }
}
