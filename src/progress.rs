// src/progress.rs
use crate::data::Flight;

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status; every hook defaults to a no-op.
pub trait Progress {
    /// A listing page came back with `rows` flights.
    fn page_done(&mut self, _offset: usize, _rows: usize) {}

    /// Listing is complete; `total` rows will be extracted.
    fn begin(&mut self, _total: usize) {}

    /// Row `index` (listing order) was turned into a flight.
    fn flight_done(&mut self, _index: usize, _flight: &Flight) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress as `tracing` events.
pub struct LogProgress {
    total: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self { total: 0 }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn page_done(&mut self, offset: usize, rows: usize) {
        tracing::info!("Listing offset {offset}: {rows} flights");
    }

    fn begin(&mut self, total: usize) {
        self.total = total;
        tracing::info!("Extracting {total} flights");
    }

    fn flight_done(&mut self, index: usize, flight: &Flight) {
        let state = if flight.is_scored() { "scored" } else { "no points" };
        tracing::debug!("[{}/{}] {} ({state})", index + 1, self.total, flight.url);
    }
}
