
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use clap::Args;
use extract::{CellPos, Grid, SelectionRange, TextExtractor};

use crate::{
    config::ConfigArgs,
    input::{self, Delimiter},
};

/// Reads a table and writes the clipboard text for the selected cells.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to the input table. Reads standard input if omitted.
    input: Option<PathBuf>,

    /// Field separator used by the input table.
    #[arg(long, value_enum, default_value_t = Delimiter::Csv)]
    delimiter: Delimiter,

    /// Cell where the selection starts, as ROW:COL (0-based). Selects the
    /// whole table if neither --from nor --to is given.
    #[arg(long, requires = "to")]
    from: Option<CellPos>,

    /// Cell where the selection ends, as ROW:COL (0-based).
    #[arg(long, requires = "from")]
    to: Option<CellPos>,

    /// Path to write the output to. Writes to standard output if omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl Command {
    fn selection(&self) -> Option<SelectionRange> {
        match (self.from, self.to) {
            (Some(anchor), Some(focus)) => Some(SelectionRange::from_anchor_focus(anchor, focus)),
            _ => None,
        }
    }
}

/// Runs the subcommand.
pub fn run(cmd: &Command, xdg_dirs: &xdg::BaseDirectories) -> Result<()> {
    let extractor = TextExtractor::new(cmd.config.allowed_units(xdg_dirs)?);

    let table = match &cmd.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening input {path:?}"))?;
            input::read_grid(file, cmd.delimiter)
        }
        None => input::read_grid(std::io::stdin().lock(), cmd.delimiter),
    }
    .context("reading input table")?;

    let text = extract_text(&extractor, table, cmd.selection())?;

    match &cmd.output {
        Some(path) => write_atomic(path, &text),
        None => write_text(&mut std::io::stdout().lock(), &text)
            .context("writing to standard output"),
    }
}

/// Selects the cells from `table` (all of it when `selection` is `None`) and
/// converts them to clipboard text.
fn extract_text(
    extractor: &TextExtractor,
    table: Grid,
    selection: Option<SelectionRange>,
) -> Result<String> {
    let grid = match selection {
        Some(range) => {
            log::info!("selecting {} to {}", range.start(), range.end());
            range.select(&table)
        }
        None => table,
    };

    Ok(extractor.extract(grid)?)
}

/// Writes `text` as-is, adding no line terminator.
fn write_text<W: Write>(w: &mut W, text: &str) -> Result<()> {
    write!(w, "{text}")?;
    w.flush()?;
    Ok(())
}

fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let mut file =
        AtomicWriteFile::open(path).with_context(|| format!("opening output {path:?}"))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("writing output {path:?}"))?;
    file.commit()
        .with_context(|| format!("committing output {path:?}"))?;
    Ok(())
}
