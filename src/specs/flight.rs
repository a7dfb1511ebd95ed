// src/specs/flight.rs
//! Listing row (+ detail page) → [`Flight`].
//!
//! Row layout on the season listing:
//! ```text
//! td.cllDatum > a     date, DD.MM.YYYY
//! td.jmeno > a        pilot, "Last First"
//! td (3rd)            locality
//! td.cllVzdal × 2     length, average speed ("312.5 km", "85.2 km/h")
//! td.cllBody          CPS points; empty for flights outside the ranking
//! a (last)            relative link to the detail page
//! ```
//!
//! Fields that are optional on the site fall back to an empty value. Fields
//! every scored row has (date, pilot, distances, locality) fail the record.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use thiserror::Error;

use crate::config::consts::DETAIL_BASE;
use crate::core::Fetch;
use crate::core::html::{find, first_text, nth, sel};
use crate::core::sanitize::{first_token, reformat_date, reverse_name};
use crate::data::{Flight, FlightRecord, TrackType};
use crate::error::{Error, Result};
use crate::specs::detail::DetailPage;
use crate::tables::Lookups;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no date cell")]
    MissingDate,
    #[error("unparsable date {0:?}")]
    BadDate(String),
    #[error("no pilot name")]
    MissingPilot,
    #[error("no distance cell #{0}")]
    MissingDistance(usize),
    #[error("no locality cell")]
    MissingLocality,
}

struct RowSelectors {
    link: Selector,
    points: Selector,
    date: Selector,
    pilot: Selector,
    distance: Selector,
    cell: Selector,
}

static SEL: LazyLock<RowSelectors> = LazyLock::new(|| RowSelectors {
    link: sel("a"),
    points: sel("td.cllBody"),
    date: sel("td.cllDatum a"),
    pilot: sel("td.jmeno a"),
    distance: sel("td.cllVzdal"),
    cell: sel("td"),
});

const LOCALITY_CELL: usize = 2;
const LENGTH_CELL: usize = 0;
const SPEED_CELL: usize = 1;

/* ---------------- Row fields ---------------- */

/// Absolute detail URL from the row's last link.
pub fn flight_url(row: ElementRef<'_>) -> Option<String> {
    let href = row.select(&SEL.link).last()?.value().attr("href")?;
    Some(join!(DETAIL_BASE, href))
}

/// CPS points, `None` for rows outside the ranking.
pub fn points(row: ElementRef<'_>) -> Option<String> {
    let cell = find(row, &SEL.points)?;
    first_token(first_text(cell)?).map(String::from)
}

pub fn date(row: ElementRef<'_>) -> std::result::Result<String, ExtractError> {
    let raw = find(row, &SEL.date)
        .and_then(first_text)
        .ok_or(ExtractError::MissingDate)?;
    reformat_date(raw).ok_or_else(|| ExtractError::BadDate(s!(raw)))
}

pub fn pilot(row: ElementRef<'_>) -> std::result::Result<String, ExtractError> {
    find(row, &SEL.pilot)
        .and_then(first_text)
        .map(reverse_name)
        .ok_or(ExtractError::MissingPilot)
}

/// Number part of the n-th distance cell (`0` = length, `1` = average speed).
pub fn distance(row: ElementRef<'_>, n: usize) -> std::result::Result<String, ExtractError> {
    nth(row, &SEL.distance, n)
        .and_then(first_text)
        .and_then(first_token)
        .map(String::from)
        .ok_or(ExtractError::MissingDistance(n))
}

pub fn locality(row: ElementRef<'_>) -> std::result::Result<String, ExtractError> {
    nth(row, &SEL.cell, LOCALITY_CELL)
        .and_then(first_text)
        .map(String::from)
        .ok_or(ExtractError::MissingLocality)
}

/* ---------------- Extractor ---------------- */

/// Builds flights from listing rows, fetching a detail page for scored ones.
pub struct FlightExtractor<'t, F: Fetch> {
    fetcher: F,
    tables: &'t Lookups,
}

impl<'t, F: Fetch> FlightExtractor<'t, F> {
    pub fn new(fetcher: F, tables: &'t Lookups) -> Self {
        Self { fetcher, tables }
    }

    pub fn extract(&self, row: ElementRef<'_>) -> Result<Flight> {
        let url = flight_url(row).ok_or(Error::MissingLink)?;

        // Points gate everything else, including the detail request.
        let Some(cps_points) = points(row) else {
            tracing::debug!("{url}: no points, skipped");
            return Ok(Flight::unscored(url));
        };

        let page = DetailPage::fetch(&self.fetcher, &url)?;
        match self.record(row, &page, &url, cps_points) {
            Ok(record) => Ok(Flight { url, record: Some(record) }),
            Err(source) => Err(Error::Extract { url, source }),
        }
    }

    fn record(
        &self,
        row: ElementRef<'_>,
        page: &DetailPage,
        url: &str,
        cps_points: String,
    ) -> std::result::Result<FlightRecord, ExtractError> {
        let aircraft_registration = page.registration().unwrap_or_default();
        let plane_acronym = self.tables.acronym(&aircraft_registration);

        let descriptor = page.track_descriptor();
        let track_shape = match descriptor.as_deref() {
            Some(d) => self.tables.shape_code(d),
            None => {
                tracing::warn!("{url}: track descriptor not found, shape left blank");
                None
            }
        };
        let track_type = descriptor
            .as_deref()
            .map(TrackType::from_descriptor)
            .unwrap_or_default();

        Ok(FlightRecord {
            cps_points,
            date: date(row)?,
            pilot: pilot(row)?,
            copilot: page.copilot().unwrap_or_default(),
            length: distance(row, LENGTH_CELL)?,
            avg_speed: distance(row, SPEED_CELL)?,
            aircraft_registration,
            plane: page.plane().unwrap_or_default(),
            plane_acronym,
            track_shape,
            track_type,
            locality: locality(row)?,
        })
    }
}
