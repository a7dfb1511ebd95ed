// src/tables.rs
//! Static classification tables.
//!
//! Both tables are plain key → value data copied from the club's spreadsheet.
//! Keys are matched exactly; a missing key is `None`, which is not the same as a
//! key that maps to an empty value (`9722`).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Track descriptor (as printed on the detail page) → short shape code.
const TRACK_SHAPES: &[(&str, &str)] = &[
    ("polygon s 5OB", "P5"),
    ("polygon s 4OB", "P4"),
    ("polygon s 3OB", "P3"),
    ("FAI trojúhelník", "TF"),
    ("trojúhelník s odletem z ramene", "T3"),
    ("trojúhelník", "T2"),
    ("2OB", "L2"),
    ("3OB", "L3"),
    ("4OB", "L4"),
    ("5OB", "L5"),
    ("návratová", "N"),
    ("FAI trojúhelník s odletem z ramene", "TF"),
];

/// Registration digits → club acronym painted on the glider.
const PLANE_ACRONYMS: &[(&str, &str)] = &[
    ("0705", "V5"),
    ("1600", "A1"),
    ("1177", "ZL"),
    ("1432", "DP"),
    ("1818", "SK"),
    ("1948", "GV"),
    ("1974", "EJ"),
    ("2424", "24"),
    ("2474", "24"),
    ("2912", "XJ"),
    ("3133", "6L"),
    ("3370", "JW"),
    ("3740", "ICQ"),
    ("3773", "ZE"),
    ("8522", "PK"),
    ("9000", "AF"),
    ("9722", ""),
    ("9902", "EB"),
];

static BUILTIN: LazyLock<Lookups> = LazyLock::new(|| Lookups::new(TRACK_SHAPES, PLANE_ACRONYMS));

#[derive(Debug, Clone)]
pub struct Lookups {
    shapes: HashMap<&'static str, &'static str>,
    acronyms: HashMap<&'static str, &'static str>,
}

impl Lookups {
    pub fn new(
        shapes: &[(&'static str, &'static str)],
        acronyms: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            shapes: shapes.iter().copied().collect(),
            acronyms: acronyms.iter().copied().collect(),
        }
    }

    /// The club tables, built on first use and shared for the rest of the process.
    pub fn builtin() -> &'static Lookups {
        &BUILTIN
    }

    pub fn shape_code(&self, label: &str) -> Option<&'static str> {
        self.shapes.get(label).copied()
    }

    pub fn acronym(&self, registration: &str) -> Option<&'static str> {
        self.acronyms.get(registration).copied()
    }
}
