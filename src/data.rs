// src/data.rs
//! In-memory shape of one exported flight.

/// Descriptor the site prints for a speed flight whose task was changed en route.
pub const ROUTE_CHANGE_DESCRIPTOR: &str = "rychlostní let se změnou tratě za letu";

/// One row of the season listing.
///
/// `record` is `None` when the row carries no CPS points; such a flight is not
/// scoreable, its detail page is never fetched and it is never exported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flight {
    pub url: String,
    pub record: Option<FlightRecord>,
}

impl Flight {
    pub fn unscored(url: String) -> Self {
        Self { url, record: None }
    }

    pub fn is_scored(&self) -> bool {
        self.record.is_some()
    }
}

/// Everything known about a scoreable flight, already normalized for export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightRecord {
    pub cps_points: String,
    /// `DD/MM/YY`
    pub date: String,
    /// "First Last"
    pub pilot: String,
    pub copilot: String,
    pub length: String,
    pub avg_speed: String,
    pub aircraft_registration: String,
    pub plane: String,
    /// `Some("")` is a known glider without an acronym; `None` is an unknown one.
    pub plane_acronym: Option<&'static str>,
    pub track_shape: Option<&'static str>,
    pub track_type: TrackType,
    pub locality: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackType {
    #[default]
    Standard,
    /// Counted at 15 % in the club ranking.
    RouteChange,
}

impl TrackType {
    pub fn from_descriptor(descriptor: &str) -> Self {
        if descriptor == ROUTE_CHANGE_DESCRIPTOR {
            TrackType::RouteChange
        } else {
            TrackType::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Standard => "",
            TrackType::RouteChange => "15 %",
        }
    }
}
