// src/specs/listing.rs
//! Season listing (`index3.php?lpg=sezlet`).
//!
//! One page is a `table.tblList` of up to [`PAGE_SIZE`] flights, each a
//! `<tr class="rowOdd">` / `<tr class="rowEven">`. Paging goes through the
//! `strankovani` offset; the site answers past-the-end offsets with an empty
//! table, which is how we know we are done.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::PAGE_SIZE;
use crate::config::options::RunOptions;
use crate::core::{Fetch, html::{find, sel}};
use crate::error::Result;

static ROW_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"row(Odd|Even)").expect("row class regex"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table.tblList"));
static ROWS: LazyLock<Selector> = LazyLock::new(|| sel("tr"));

/// One fetched and parsed listing page.
pub struct ListingPage {
    pub offset: usize,
    doc: Html,
}

impl ListingPage {
    pub fn parse(offset: usize, body: &str) -> Self {
        Self { offset, doc: Html::parse_document(body) }
    }

    /// Flight rows in page order, from the first results table only.
    pub fn rows(&self) -> Vec<ElementRef<'_>> {
        let Some(table) = find(self.doc.root_element(), &TABLE) else {
            return Vec::new();
        };
        table
            .select(&ROWS)
            .filter(|tr| tr.value().classes().any(|c| ROW_CLASS.is_match(c)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Listing pages at offsets `0, PAGE_SIZE, 2 * PAGE_SIZE, …`, stopping at the
/// first page without rows or after `max_pages` requests.
pub struct Pages<'a, F: Fetch> {
    fetcher: F,
    opts: &'a RunOptions,
    next: usize,
    done: bool,
}

impl<'a, F: Fetch> Pages<'a, F> {
    pub fn new(fetcher: F, opts: &'a RunOptions) -> Self {
        Self { fetcher, opts, next: 0, done: false }
    }
}

impl<F: Fetch> Iterator for Pages<'_, F> {
    type Item = Result<ListingPage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next >= self.opts.max_pages {
            return None;
        }
        let offset = self.next * PAGE_SIZE;
        self.next += 1;

        let body = match self.fetcher.fetch(&self.opts.listing_url(offset)) {
            Ok(b) => b,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };
        let page = ListingPage::parse(offset, &body);
        if page.is_empty() {
            tracing::info!("No flights at offset {offset}, listing exhausted");
            self.done = true;
            return None;
        }
        Some(Ok(page))
    }
}

/// Fetch every non-empty listing page for the season.
pub fn load_pages<F: Fetch>(fetcher: F, opts: &RunOptions) -> Result<Vec<ListingPage>> {
    Pages::new(fetcher, opts).collect()
}
