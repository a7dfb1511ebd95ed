// src/bin/cli.rs
use clap::Parser;
use cpska_export::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    log::init(args.verbose);

    let summary = cli::run(&args)?;
    println!("Wrote {}", summary.path.display());
    Ok(())
}
