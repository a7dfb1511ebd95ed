// src/specs/mod.rs
//! # Page specs
//!
//! One module per cpska.cz page we read. A spec knows *where the data lives in
//! the markup* and how to pull it out tolerantly; it does not decide when to
//! fetch, what to keep, or how to write it.
//!
//! ## Typical call chain
//! ```text
//! runner → listing::Pages         (season listing, page by page)
//!        → flight::FlightExtractor (one row → Flight)
//!              ↘ detail::DetailPage (only for rows with points)
//! ```
//!
//! ## Conventions
//! - Selectors are built once (`LazyLock`) and scoped to the smallest node
//!   that holds the field (a row, `#right`, a panel).
//! - A field the site may omit comes back as `Option`; the record builder
//!   picks the default. Fields every scored row has are typed errors.
//! - Child-node access counts text nodes, so "second content of the heading"
//!   means exactly that, not "second element".
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML snippets.
pub mod detail;
pub mod flight;
pub mod listing;
