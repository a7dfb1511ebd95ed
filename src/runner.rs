// src/runner.rs
use std::path::PathBuf;

use chrono::Local;

use crate::{
    config::options::RunOptions,
    core::Fetch,
    data::Flight,
    error::Result,
    file::{append_flights, output_path},
    progress::Progress,
    specs::{flight::FlightExtractor, listing},
    tables::Lookups,
};

/// Summary of what was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub pages: usize,
    pub rows: usize,
    pub exported: usize,
}

/// Fetch the whole season listing and turn every row into a flight.
/// Returned oldest first (the listing is newest first).
pub fn collect_flights<F: Fetch>(
    fetcher: F,
    tables: &Lookups,
    opts: &RunOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<(usize, Vec<Flight>)> {
    let pages = listing::load_pages(&fetcher, opts)?;

    let rows: Vec<_> = pages.iter().flat_map(|p| p.rows()).collect();
    if let Some(p) = progress.as_deref_mut() {
        for page in &pages {
            p.page_done(page.offset, page.rows().len());
        }
        p.begin(rows.len());
    }

    let extractor = FlightExtractor::new(&fetcher, tables);
    let mut flights = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let flight = extractor.extract(row)?;
        if let Some(p) = progress.as_deref_mut() {
            p.flight_done(i, &flight);
        }
        flights.push(flight);
    }

    flights.reverse();
    Ok((pages.len(), flights))
}

/// Top-level run: listing → flights → `<stamp>.txt` in `opts.out_dir`.
pub fn run<F: Fetch>(
    fetcher: F,
    tables: &Lookups,
    opts: &RunOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let started = Local::now().naive_local();
    tracing::info!("Exporting season {}", opts.year);

    let (pages, flights) = collect_flights(fetcher, tables, opts, progress.as_deref_mut())?;
    let path = output_path(&opts.out_dir, &started);
    let exported = append_flights(&path, &flights)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    tracing::info!("Wrote {exported} of {} flights to {}", flights.len(), path.display());

    Ok(RunSummary { path, pages, rows: flights.len(), exported })
}
