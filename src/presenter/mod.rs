pub mod extract;
pub mod format;
pub mod sort;
pub mod table;

pub use sort::{SortColumn, SortDirection, SortState};
pub use table::{header_cells, render_rows, DisplayRow, HeaderCell};
