use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    #[error("range bound is not a number")]
    NotANumber,

    #[error("range bound must not be negative: {0}")]
    Negative(i64),

    #[error("range bound is too large: {0}")]
    TooLarge(i64),

    #[error("range minimum ({min}) must be below maximum ({max})")]
    Inverted { min: i64, max: i64 },

    #[error("range spans {span} rows; at most {max} fit in the table")]
    TooWide { span: u32, max: u32 },
}

/// Widest table the grid renders, in rows (and columns) after the corner.
pub const MAX_GRID_SPAN: u32 = 100;

/// Inclusive index range for the multiplication grid.
///
/// The first value is the corner header; cells cover `min + 1 ..= max` on
/// both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridRange", into = "RawGridRange")]
pub struct GridRange {
    min: u32,
    max: u32,
}

impl GridRange {
    /// # Errors
    ///
    /// Returns `RangeError::Negative` for a bound below zero,
    /// `RangeError::TooLarge` if a bound does not fit in `u32`, and
    /// `RangeError::Inverted` unless `min < max`. A range with more than
    /// [`MAX_GRID_SPAN`] cells per axis is `RangeError::TooWide`.
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        let min_u = Self::bound(min)?;
        let max_u = Self::bound(max)?;
        if min_u >= max_u {
            return Err(RangeError::Inverted { min, max });
        }
        let span = max_u - min_u;
        if span > MAX_GRID_SPAN {
            return Err(RangeError::TooWide {
                span,
                max: MAX_GRID_SPAN,
            });
        }
        Ok(Self {
            min: min_u,
            max: max_u,
        })
    }

    /// Check a single bound on its own, before it is paired.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Negative` or `RangeError::TooLarge`.
    pub fn bound(value: i64) -> Result<u32, RangeError> {
        if value < 0 {
            return Err(RangeError::Negative(value));
        }
        u32::try_from(value).map_err(|_| RangeError::TooLarge(value))
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Every header value, corner included.
    #[must_use]
    pub fn headers(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Row and column values that hold cells.
    #[must_use]
    pub fn cells(&self) -> RangeInclusive<u32> {
        (self.min + 1)..=self.max
    }

    #[must_use]
    pub fn contains_cell(&self, row: u32, column: u32) -> bool {
        let cells = self.cells();
        cells.contains(&row) && cells.contains(&column)
    }

    /// Next cell in row-major order, or `None` after the last cell.
    #[must_use]
    pub fn next_cell(&self, row: u32, column: u32) -> Option<(u32, u32)> {
        if !self.contains_cell(row, column) {
            return None;
        }
        if column < self.max {
            Some((row, column + 1))
        } else if row < self.max {
            Some((row + 1, self.min + 1))
        } else {
            None
        }
    }
}

impl Default for GridRange {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}


#[derive(Serialize, Deserialize)]
struct RawGridRange {
    min: i64,
    max: i64,
}

impl TryFrom<RawGridRange> for GridRange {
    type Error = RangeError;

    fn try_from(raw: RawGridRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl From<GridRange> for RawGridRange {
    fn from(range: GridRange) -> Self {
        Self {
            min: i64::from(range.min),
            max: i64::from(range.max),
        }
    }
}
