mod sheet_vm;
mod table_vm;
mod time_fmt;

pub use sheet_vm::{Feedback, OperatorToggleVm, ProblemRowVm, ProblemSheetVm, problem_input_id};
pub use table_vm::{TableCellVm, TimesTableVm, cell_input_id};
pub use time_fmt::format_elapsed;
