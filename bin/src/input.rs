//! Reads a table of cell text from CSV or TSV.

use std::io::Read;

use anyhow::{Context, Result};
use extract::{Grid, Row};

/// Field separator of the input table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Delimiter {
    #[default]
    Csv,
    Tsv,
}

impl Delimiter {
    fn byte(self) -> u8 {
        match self {
            Delimiter::Csv => b',',
            Delimiter::Tsv => b'\t',
        }
    }
}

/// Reads every record of `rdr` as one row. Rows may differ in length; the
/// caller decides whether that is acceptable.
pub fn read_grid<R: Read>(rdr: R, delimiter: Delimiter) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.byte())
        .from_reader(rdr);

    let mut grid = Grid::default();
    for (row_index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading row index {row_index}"))?;
        grid.push(Row(record.iter().map(str::to_string).collect()));
    }

    log::debug!("read {} rows", grid.len());
    Ok(grid)
}
