use clap::Parser;
use mdtile::cli::{self, Cli};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)?;
    Ok(())
}
