use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

mod canmerge;
mod extracttext;

/// Converts selected table cells into text that pastes into a spreadsheet.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    Extract(extracttext::Command),
    CanMerge(canmerge::Command),
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    let xdg_dirs = xdg::BaseDirectories::with_prefix(crate::config::XDG_PREFIX);

    use Command::*;
    match &args.command {
        Extract(cmd) => extracttext::run(cmd, &xdg_dirs),
        CanMerge(cmd) => canmerge::run(cmd, &xdg_dirs),
    }
}
