use std::ops::RangeInclusive;

use tracing::{debug, warn};

use drill_core::input;
use drill_core::model::{GridRange, RangeError};

use crate::error::GridError;

/// Result of typing into one multiplication-table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// Input held no digits.
    Ignored,
    Incorrect,
    Correct {
        /// Next cell in row-major order, if any.
        next: Option<(u32, u32)>,
    },
}

/// Standing multiplication table: a range of row/column values and exact
/// product checks. There is no completion state.
#[derive(Debug, Clone)]
pub struct GridValidator {
    range: GridRange,
    pending_min: u32,
    pending_max: u32,
}

impl GridValidator {
    #[must_use]
    pub fn new(range: GridRange) -> Self {
        Self {
            range,
            pending_min: range.min(),
            pending_max: range.max(),
        }
    }

    #[must_use]
    pub fn range(&self) -> GridRange {
        self.range
    }

    /// Replace the range.
    ///
    /// # Errors
    ///
    /// Returns `RangeError` for negative or inverted bounds. The previous
    /// range stays in place, and a bound that is invalid on its own is not
    /// kept for later typed edits.
    pub fn set_range(&mut self, min: i64, max: i64) -> Result<GridRange, RangeError> {
        let (min, max) = (GridRange::bound(min)?, GridRange::bound(max)?);
        self.pending_min = min;
        self.pending_max = max;
        self.apply_pending()
    }

    /// Store a typed minimum and re-apply the range.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Input` for text without digits,
    /// `GridError::Range(RangeError::Negative)` or `TooLarge` for a bound
    /// that is not stored, and other `GridError::Range` values if the pair is still
    /// invalid.
    pub fn set_min_input(&mut self, raw: &str) -> Result<GridRange, GridError> {
        self.pending_min = parse_grid_bound(raw)?;
        Ok(self.apply_pending()?)
    }

    /// Store a typed maximum and re-apply the range.
    ///
    /// # Errors
    ///
    /// See [`GridValidator::set_min_input`].
    pub fn set_max_input(&mut self, raw: &str) -> Result<GridRange, GridError> {
        self.pending_max = parse_grid_bound(raw)?;
        Ok(self.apply_pending()?)
    }

    /// Header values along each axis, corner included.
    #[must_use]
    pub fn headers(&self) -> Vec<u32> {
        self.range.headers().collect()
    }

    /// Row and column values that hold cells.
    #[must_use]
    pub fn cells(&self) -> RangeInclusive<u32> {
        self.range.cells()
    }

    /// Exact check of `value` against `row * column`.
    #[must_use]
    pub fn validate_cell(&self, row: u32, column: u32, value: u64) -> bool {
        u64::from(row) * u64::from(column) == value
    }

    /// Normalize a raw keystroke buffer and check it.
    #[must_use]
    pub fn submit_cell(&self, row: u32, column: u32, raw: &str) -> CellOutcome {
        let Ok(value) = input::parse_whole(raw) else {
            return CellOutcome::Ignored;
        };
        if !self.validate_cell(row, column, value) {
            return CellOutcome::Incorrect;
        }
        CellOutcome::Correct {
            next: self.range.next_cell(row, column),
        }
    }

    fn apply_pending(&mut self) -> Result<GridRange, RangeError> {
        match GridRange::new(i64::from(self.pending_min), i64::from(self.pending_max)) {
            Ok(range) => {
                debug!(min = range.min(), max = range.max(), "grid range updated");
                self.range = range;
                Ok(range)
            }
            Err(err) => {
                warn!(%err, "rejected grid range");
                Err(err)
            }
        }
    }
}

impl Default for GridValidator {
    fn default() -> Self {
        Self::new(GridRange::default())
    }
}

fn parse_grid_bound(raw: &str) -> Result<u32, GridError> {
    Ok(GridRange::bound(input::parse_bound(raw)?)?)
}
