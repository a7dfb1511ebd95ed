// src/csv.rs
use std::io::{self, Write};

use crate::core::sanitize::decimal_comma;
use crate::data::{Flight, FlightRecord};

/* ---------------- Line layout ---------------- */

// Column order of the club ranking sheet. Empty slots are columns the sheet
// fills in itself; they must stay so the pasted rows line up.
//
//  ;date;locality;pilot;copilot;plane;;registration;acronym;shape;;;"length";
//  ;;;;;;"avg speed";track type;;;points;

/// One sheet line for a scored flight (no trailing newline).
pub fn record_line(r: &FlightRecord) -> String {
    format!(
        ";{};{};{};{};{};;{};{};{};;;\"{}\";;;;;;;\"{}\";{};;;{};",
        r.date,
        r.locality,
        r.pilot,
        r.copilot,
        r.plane,
        r.aircraft_registration,
        r.plane_acronym.unwrap_or_default(),
        r.track_shape.unwrap_or_default(),
        decimal_comma(&r.length),
        decimal_comma(&r.avg_speed),
        r.track_type.as_str(),
        r.cps_points,
    )
}

/* ---------------- Writing ---------------- */

/// Write the flight's line, if it has one. Returns whether anything was written.
pub fn write_flight<W: Write>(mut w: W, flight: &Flight) -> io::Result<bool> {
    match &flight.record {
        Some(r) => {
            writeln!(w, "{}", record_line(r))?;
            Ok(true)
        }
        None => Ok(false),
    }
}
