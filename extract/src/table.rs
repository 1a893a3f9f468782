use std::ops::{Deref, DerefMut};

/// Returned when the rows of a [Grid] are not all the same length.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("grid is not rectangular: row {row} has {actual} cells, expected {expected}")]
pub struct InvalidShapeError {
    /// Index of the first row whose length differs from row 0.
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

/// Row-major grid of cell text, as selected from an on-screen table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grid(pub Vec<Row>);

impl Grid {
    /// Returns `(num_rows, num_columns)`, or an error if the grid is ragged.
    pub fn shape(&self) -> Result<(usize, usize), InvalidShapeError> {
        let expected = match self.0.first() {
            Some(row) => row.len(),
            None => return Ok((0, 0)),
        };

        match self
            .0
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, bad)) => Err(InvalidShapeError {
                row,
                expected,
                actual: bad.len(),
            }),
            None => Ok((self.0.len(), expected)),
        }
    }

    /// Copies out the cells at `index` in each row.
    ///
    /// Panics if any row has no cell at `index`; check [Grid::shape] first.
    pub fn column(&self, index: usize) -> Column {
        Column(self.0.iter().map(|row| row[index].clone()).collect())
    }

    /// Trims surrounding whitespace from every cell.
    pub fn trim_cells(&mut self) {
        for cell in self.0.iter_mut().flat_map(|row| row.0.iter_mut()) {
            let trimmed = cell.trim();
            if trimmed.len() != cell.len() {
                *cell = trimmed.to_string();
            }
        }
    }
}

impl Deref for Grid {
    type Target = Vec<Row>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, R> From<C> for Grid
where
    C: IntoIterator<Item = R>,
    R: Into<Row>,
{
    fn from(value: C) -> Self {
        Grid(value.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}

/// One string per row, taken from a single grid column (or a run of merged
/// grid columns).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Column(pub Vec<String>);

impl Deref for Column {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Column {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[gtest]
    fn shape_of_rectangular_grid() {
        let grid: Grid = [["a", "b", "c"], ["d", "e", "f"]].into();
        expect_eq!(grid.shape(), Ok((2, 3)));
    }

    #[gtest]
    fn shape_of_empty_grid() {
        expect_eq!(Grid::default().shape(), Ok((0, 0)));
    }

    #[gtest]
    fn shape_of_rows_without_cells() {
        let grid: Grid = [Vec::<&str>::new(), Vec::new()].into();
        expect_eq!(grid.shape(), Ok((2, 0)));
    }

    #[gtest]
    fn shape_reports_first_ragged_row() {
        let grid: Grid = [vec!["a", "b"], vec!["c", "d"], vec!["e"], vec![]].into();
        expect_eq!(
            grid.shape(),
            Err(InvalidShapeError {
                row: 2,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[gtest]
    fn column_copies_cells_top_to_bottom() {
        let grid: Grid = [["a", "b"], ["c", "d"], ["e", "f"]].into();
        expect_that!(
            grid.column(1),
            eq(&Column(vec!["b".to_string(), "d".to_string(), "f".to_string()]))
        );
    }

    #[test]
    #[should_panic]
    fn column_past_short_row_panics() {
        let grid: Grid = [vec!["a", "b"], vec!["c"]].into();
        let _ = grid.column(1);
    }

    #[gtest]
    fn trim_cells_strips_whitespace() {
        let mut grid: Grid = [[" $ ", "\t100\n"], ["", "  "]].into();
        grid.trim_cells();
        let expected: Grid = [["$", "100"], ["", ""]].into();
        expect_that!(grid, eq(&expected));
    }
}
