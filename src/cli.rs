// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::{consts::{DEFAULT_OUT_DIR, DEFAULT_YEAR, MAX_PAGES}, options::RunOptions};
use crate::core::HttpFetcher;
use crate::error::Result;
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};
use crate::tables::Lookups;

/// Export a season of club flights from cpska.cz as ranking-sheet rows.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Season to export
    #[arg(short, long, default_value = DEFAULT_YEAR)]
    pub year: String,

    /// Directory for the `<YYYYMMDD-HHMMSS>.txt` output
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Stop after this many listing pages even if they keep coming
    #[arg(long, default_value_t = MAX_PAGES)]
    pub max_pages: usize,

    /// Debug logging (every request)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            year: self.year.clone(),
            out_dir: self.out_dir.clone(),
            max_pages: self.max_pages,
        }
    }
}

pub fn run(cli: &Cli) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new()?;
    let mut progress = LogProgress::new();
    runner::run(&fetcher, Lookups::builtin(), &cli.options(), Some(&mut progress))
}
