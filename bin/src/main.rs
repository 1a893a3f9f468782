use anyhow::Result;

mod cli;
mod config;
mod input;

fn main() -> Result<()> {
    cli::run()
}
