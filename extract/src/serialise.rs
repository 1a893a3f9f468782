use crate::table::Grid;

pub const CELL_DELIMITER: &str = "\t";
pub const ROW_DELIMITER: &str = "\r\n";

/// Renders `grid` as spreadsheet-pasteable text. No trailing delimiters are
/// written.
pub fn to_clipboard_text(grid: &Grid) -> String {
    grid.iter()
        .map(|row| row.join(CELL_DELIMITER))
        .collect::<Vec<_>>()
        .join(ROW_DELIMITER)
}
