use anyhow::Result;
use clap::Args;
use extract::{AllowedUnits, cellmerge};

use crate::config::ConfigArgs;

/// Reports whether two adjacent cells would be merged into one value.
#[derive(Args, Debug)]
pub struct Command {
    /// Text of the left cell.
    left: String,

    /// Text of the right cell.
    right: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl Command {
    /// Cells are trimmed first, as they are during extraction.
    fn mergeable(&self, units: &AllowedUnits) -> bool {
        cellmerge::can_merge_cells(self.left.trim(), self.right.trim(), units)
    }
}

/// Runs the subcommand.
pub fn run(cmd: &Command, xdg_dirs: &xdg::BaseDirectories) -> Result<()> {
    let units = cmd.config.allowed_units(xdg_dirs)?;
    println!("{}", cmd.mergeable(&units));
    Ok(())
}
