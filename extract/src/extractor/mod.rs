//! Turns a selected block of table cells into clipboard text.


use crate::{
    columnmerge::merge_grid_columns,
    normalise::normalise_grid,
    serialise::to_clipboard_text,
    table::{Grid, InvalidShapeError},
    units::AllowedUnits,
};

/// Converts selected cells into tab and CRLF delimited text, rejoining
/// columns that the source table split apart (such as a `$` column next to
/// its values).
///
/// Holds only immutable configuration, so one extractor can be shared between
/// threads.
#[derive(Clone, Debug, Default)]
pub struct TextExtractor {
    units: AllowedUnits,
}

impl TextExtractor {
    pub fn new(units: AllowedUnits) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &AllowedUnits {
        &self.units
    }

    /// Produces clipboard text for `grid`.
    ///
    /// Cells are trimmed, adjacent columns are merged where every row allows
    /// it, each resulting cell is normalised and the result is serialised.
    pub fn extract(&self, mut grid: Grid) -> Result<String, InvalidShapeError> {
        let (num_rows, num_cols) = grid.shape()?;
        log::debug!("extracting {num_rows}x{num_cols} grid");

        grid.trim_cells();

        let merged = merge_grid_columns(&grid, &self.units)?;
        log::debug!(
            "merged {num_cols} columns into {}",
            merged.columns().len()
        );

        let mut merged = merged.into_grid();
        normalise_grid(&mut merged);

        Ok(to_clipboard_text(&merged))
    }
}

/// Shorthand for [TextExtractor::extract] with the given `units`.
pub fn extract(grid: Grid, units: &AllowedUnits) -> Result<String, InvalidShapeError> {
    TextExtractor::new(units.clone()).extract(grid)
}
