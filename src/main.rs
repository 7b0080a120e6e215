use bikeshare_analytics::cli::{run, Cli};
use bikeshare_analytics::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
