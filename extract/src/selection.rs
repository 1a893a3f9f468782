//! Rectangular selection over a larger table, given the cell where a drag
//! started and the cell where it ended.

use std::{fmt::Display, str::FromStr};

use crate::table::{Grid, Row};

/// 0-based position of a cell in a table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("got {0:?} which is not a cell position of the form ROW:COL")]
pub struct ParseCellPosError(String);

impl FromStr for CellPos {
    type Err = ParseCellPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(':')
            .ok_or_else(|| ParseCellPosError(s.to_string()))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| ParseCellPosError(s.to_string()))
        };
        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

impl Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Inclusive rectangle with `start` at the top left and `end` at the bottom
/// right.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelectionRange {
    start: CellPos,
    end: CellPos,
}

impl SelectionRange {
    /// Builds the rectangle spanned by `anchor` and `focus`, in whichever
    /// direction the selection was dragged. Each axis is ordered separately.
    pub fn from_anchor_focus(anchor: CellPos, focus: CellPos) -> Self {
        Self {
            start: CellPos::new(anchor.row.min(focus.row), anchor.col.min(focus.col)),
            end: CellPos::new(anchor.row.max(focus.row), anchor.col.max(focus.col)),
        }
    }

    pub fn start(&self) -> CellPos {
        self.start
    }

    pub fn end(&self) -> CellPos {
        self.end
    }

    /// Copies the selected cells out of `table`.
    ///
    /// Rows and cells beyond the edges of `table` are dropped rather than
    /// padded. A ragged `table` can therefore produce a ragged grid.
    pub fn select(&self, table: &Grid) -> Grid {
        let rows = table
            .iter()
            .skip(self.start.row)
            .take((self.end.row - self.start.row).saturating_add(1));

        Grid(
            rows.map(|row| {
                Row(row
                    .iter()
                    .skip(self.start.col)
                    .take((self.end.col - self.start.col).saturating_add(1))
                    .cloned()
                    .collect())
            })
            .collect(),
        )
    }
}
