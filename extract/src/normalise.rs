//! Clean-up applied to each cell after columns have been merged.

use lazy_regex::regex;

use crate::table::Grid;

/// Normalises a single merged cell.
///
/// 1. If the cell has no ASCII letters, every hyphen, en dash and em dash
///    becomes `0`. Numeric tables often use a bare dash for zero.
/// 2. If the cell has a `(` but no `)`, the first `(` becomes `-`. This
///    recovers the sign of a negative number whose closing parenthesis fell
///    outside the selection.
///
/// Rule 2 sees the output of rule 1.
pub fn normalise_cell(cell: &str) -> String {
    let mut out = if regex!(r"[a-zA-Z]").is_match(cell) {
        cell.to_string()
    } else {
        regex!(r"[-\u{2013}\u{2014}]").replace_all(cell, "0").into_owned()
    };

    if out.contains('(') && !out.contains(')') {
        out = out.replacen('(', "-", 1);
    }

    out
}

/// Applies [normalise_cell] to every cell of `grid`.
pub fn normalise_grid(grid: &mut Grid) {
    for cell in grid.iter_mut().flat_map(|row| row.iter_mut()) {
        let normalised = normalise_cell(cell);
        if normalised != *cell {
            log::trace!("normalised {cell:?} to {normalised:?}");
            *cell = normalised;
        }
    }
}
