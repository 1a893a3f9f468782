//! Greedy left-to-right merging of adjacent grid columns.

use crate::{
    cellmerge::can_merge_cells,
    table::{Column, Grid, InvalidShapeError, Row},
    units::AllowedUnits,
};

/// True if every row of `left` can merge with the same row of `right`.
pub fn can_merge_columns(left: &Column, right: &Column, units: &AllowedUnits) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .zip(right.iter())
        .all(|(l, r)| can_merge_cells(l, r, units))
}

/// Appends each cell of `right` onto the cell in the same row of `left`.
pub fn merge_columns(left: &mut Column, right: Column) {
    for (l, r) in left.iter_mut().zip(right.0) {
        l.push_str(&r);
    }
}

/// Output of [merge_grid_columns]. Each column is either an original grid
/// column or the concatenation of a run of adjacent ones.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct MergedColumns {
    columns: Vec<Column>,
    num_rows: usize,
}

impl MergedColumns {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Transposes back into a row-major grid.
    pub fn into_grid(self) -> Grid {
        let mut rows: Vec<Row> = (0..self.num_rows)
            .map(|_| Row(Vec::with_capacity(self.columns.len())))
            .collect();

        for column in self.columns {
            for (row, cell) in rows.iter_mut().zip(column.0) {
                row.push(cell);
            }
        }

        Grid(rows)
    }
}

/// Merges columns of `grid` in a single left-to-right pass. Fails if `grid`
/// is not rectangular.
///
/// Each column is compared only against the output column accumulated so far
/// to its left. There is no backtracking, so once a column starts a new group
/// the earlier groups are final.
pub fn merge_grid_columns(
    grid: &Grid,
    units: &AllowedUnits,
) -> Result<MergedColumns, InvalidShapeError> {
    let (num_rows, num_cols) = grid.shape()?;

    let mut columns: Vec<Column> = Vec::with_capacity(num_cols);
    let mut current: Option<Column> = None;

    for index in 0..num_cols {
        let next = grid.column(index);
        current = Some(match current {
            None => next,
            Some(mut group) if can_merge_columns(&group, &next, units) => {
                log::debug!("merging column {index} into output column {}", columns.len());
                merge_columns(&mut group, next);
                group
            }
            Some(group) => {
                log::trace!("column {index} starts output column {}", columns.len() + 1);
                columns.push(group);
                next
            }
        });
    }
    columns.extend(current);

    Ok(MergedColumns { columns, num_rows })
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn column(cells: &[&str]) -> Column {
        Column(cells.iter().map(|s| s.to_string()).collect())
    }

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter().map(|r| r.iter().copied()).into()
    }

    #[gtest]
    fn columns_merge_when_every_row_merges() {
        let units = AllowedUnits::default();
        expect_that!(
            can_merge_columns(&column(&["$", "$"]), &column(&["100", "-"]), &units),
            eq(true)
        );
    }

    #[gtest]
    fn single_row_vetoes_column_merge() {
        let units = AllowedUnits::default();
        expect_that!(
            can_merge_columns(&column(&["$", "abc"]), &column(&["5", "def"]), &units),
            eq(false)
        );
    }

    #[gtest]
    fn columns_of_different_lengths_never_merge() {
        let units = AllowedUnits::default();
        expect_that!(
            can_merge_columns(&column(&["", ""]), &column(&[""]), &units),
            eq(false)
        );
    }

    #[gtest]
    fn merge_concatenates_row_by_row() {
        let mut left = column(&["$", "("]);
        merge_columns(&mut left, column(&["100", "5"]));
        expect_that!(left, eq(&column(&["$100", "(5"])));
    }

    #[gtest]
    fn three_way_merge_by_repeated_absorption() {
        let units = AllowedUnits::default();
        let merged = merge_grid_columns(&grid(&[&["(1,234", ")", "%"]]), &units)
            .expect("rectangular grid");
        expect_that!(merged.columns(), eq(&[column(&["(1,234)%"])][..]));
    }

    #[gtest]
    fn unmergeable_columns_stay_separate() {
        let units = AllowedUnits::default();
        let merged = merge_grid_columns(
            &grid(&[&["Revenue", "$", "100"], &["Costs", "$", "(20"]]),
            &units,
        )
        .expect("rectangular grid");
        expect_that!(
            merged.into_grid(),
            eq(&grid(&[&["Revenue", "$100"], &["Costs", "$(20"]]))
        );
    }

    #[gtest]
    fn group_is_not_reevaluated_against_earlier_columns() {
        let units = AllowedUnits::default();
        // "1" and "2" cannot merge, so "2" starts a new group, and "%" then
        // joins "2" only.
        let merged = merge_grid_columns(&grid(&[&["1", "2", "%"]]), &units)
            .expect("rectangular grid");
        expect_that!(merged.into_grid(), eq(&grid(&[&["1", "2%"]])));
    }

    #[gtest]
    fn all_empty_grid_collapses_to_one_column() {
        let units = AllowedUnits::default();
        let merged = merge_grid_columns(&grid(&[&["", "", ""], &["", "", ""]]), &units)
            .expect("rectangular grid");
        expect_that!(merged.into_grid(), eq(&grid(&[&[""], &[""]])));
    }

    #[gtest]
    fn ragged_grid_is_rejected() {
        let units = AllowedUnits::default();
        let ragged: Grid = [vec!["$", "5"], vec!["$"]].into();
        expect_that!(
            merge_grid_columns(&ragged, &units),
            err(eq(&InvalidShapeError {
                row: 1,
                expected: 2,
                actual: 1,
            }))
        );
    }

    #[gtest]
    fn rows_without_cells_are_kept() {
        let units = AllowedUnits::default();
        let merged = merge_grid_columns(&grid(&[&[], &[]]), &units)
            .expect("rectangular grid");
        expect_that!(merged.columns().len(), eq(0));
        expect_that!(merged.into_grid(), eq(&grid(&[&[], &[]])));
    }
}
