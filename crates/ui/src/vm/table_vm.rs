use std::collections::HashMap;

use services::{CellOutcome, GridValidator};

use super::sheet_vm::Feedback;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableCellVm {
    pub row: u32,
    pub column: u32,
    pub input_id: String,
    pub entry: String,
    pub feedback: Feedback,
}

#[must_use]
pub fn cell_input_id(row: u32, column: u32) -> String {
    format!("cell-{row}-{column}")
}

/// Screen state for the multiplication table.
pub struct TimesTableVm {
    grid: GridValidator,
    min_text: String,
    max_text: String,
    entries: HashMap<(u32, u32), (String, Feedback)>,
    error: Option<String>,
}

impl TimesTableVm {
    #[must_use]
    pub fn new(grid: GridValidator) -> Self {
        let range = grid.range();
        Self {
            min_text: range.min().to_string(),
            max_text: range.max().to_string(),
            grid,
            entries: HashMap::new(),
            error: None,
        }
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

    pub fn set_min_text(&mut self, raw: String) {
        let result = self.grid.set_min_input(&raw).map(|_| ());
        self.min_text = raw;
        self.after_range_change(result);
    }

    pub fn set_max_text(&mut self, raw: String) {
        let result = self.grid.set_max_input(&raw).map(|_| ());
        self.max_text = raw;
        self.after_range_change(result);
    }

    fn after_range_change(&mut self, result: Result<(), services::GridError>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.entries.clear();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Corner header value.
    #[must_use]
    pub fn corner(&self) -> u32 {
        self.grid.range().min()
    }

    /// Values along each axis that hold cells.
    #[must_use]
    pub fn axis(&self) -> Vec<u32> {
        self.grid.cells().collect()
    }

    #[must_use]
    pub fn row(&self, row: u32) -> Vec<TableCellVm> {
        self.grid
            .cells()
            .map(|column| {
                let (entry, feedback) = self
                    .entries
                    .get(&(row, column))
                    .cloned()
                    .unwrap_or_default();
                TableCellVm {
                    row,
                    column,
                    input_id: cell_input_id(row, column),
                    entry,
                    feedback,
                }
            })
            .collect()
    }

    /// Record typed text for a cell and check it. Returns the cell that should
    /// receive focus next.
    pub fn input(&mut self, row: u32, column: u32, raw: String) -> Option<(u32, u32)> {
        let outcome = self.grid.submit_cell(row, column, &raw);
        let (feedback, next) = match outcome {
            CellOutcome::Ignored => (Feedback::Blank, None),
            CellOutcome::Incorrect => (Feedback::Incorrect, None),
            CellOutcome::Correct { next } => (Feedback::Correct, next),
        };
        self.entries.insert((row, column), (raw, feedback));
        next
    }
}
