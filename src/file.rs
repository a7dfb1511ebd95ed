// src/file.rs

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::config::consts::{OUT_EXT, STAMP_FORMAT};
use crate::csv::write_flight;
use crate::data::Flight;

/// `<dir>/<YYYYMMDD-HHMMSS>.txt` for a run started at `started`.
pub fn output_path(dir: &Path, started: &NaiveDateTime) -> PathBuf {
    let stamp = started.format(STAMP_FORMAT).to_string();
    dir.join(join!(stamp, ".", OUT_EXT))
}

/// Append one line per scored flight to `path`, creating it if needed.
/// Returns the number of lines written. Without scored flights the file is not touched.
pub fn append_flights(
    path: &Path,
    flights: &[Flight],
) -> io::Result<usize> {
    if !flights.iter().any(Flight::is_scored) {
        return Ok(0);
    }
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);

    let mut written = 0;
    for flight in flights {
        if write_flight(&mut out, flight)? {
            written += 1;
        }
    }
    out.flush()?;
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
