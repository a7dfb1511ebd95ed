// src/specs/detail.rs
//! Flight detail page (`index3.php?lpg=let…`).
//!
//! Everything we read lives under `#right`:
//! ```text
//! <h2><span>LS-4a</span> OK-1600</h2>       plane type, then registration
//! <div class="panel_lt">…</div> × 3           third panel's first <p> holds the track
//! ```
//! Pilot panels (`div.panel_pilot`) may sit anywhere on the page; the second one,
//! when present, is the copilot.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::Fetch;
use crate::core::html::{child_content, child_element, find, first_text, nth, sel};
use crate::core::sanitize::{first_digit_run, skip_chars};
use crate::error::Result;

struct DetailSelectors {
    heading: Selector,
    info_panel: Selector,
    paragraph: Selector,
    pilot_panel: Selector,
    name: Selector,
}

static SEL: LazyLock<DetailSelectors> = LazyLock::new(|| DetailSelectors {
    heading: sel("#right h2"),
    info_panel: sel("#right div.panel_lt"),
    paragraph: sel("p"),
    pilot_panel: sel("div.panel_pilot"),
    name: sel("div.jmeno"),
});

/// Characters in front of the track descriptor (": ").
const DESCRIPTOR_PREFIX: usize = 2;

pub struct DetailPage {
    doc: Html,
}

impl DetailPage {
    pub fn parse(body: &str) -> Self {
        Self { doc: Html::parse_document(body) }
    }

    /// One GET, no retry. Transport errors are the caller's problem.
    pub fn fetch<F: Fetch>(fetcher: &F, url: &str) -> Result<Self> {
        let body = fetcher.fetch(url)?;
        Ok(Self::parse(&body))
    }

    fn root(&self) -> ElementRef<'_> {
        self.doc.root_element()
    }

    fn heading(&self) -> Option<ElementRef<'_>> {
        find(self.root(), &SEL.heading)
    }

    /// Name in the second pilot panel.
    pub fn copilot(&self) -> Option<String> {
        let panel = nth(self.root(), &SEL.pilot_panel, 1)?;
        let name = find(panel, &SEL.name)?;
        first_text(name).map(String::from)
    }

    /// Digits of the registration that follows the plane type in the heading.
    pub fn registration(&self) -> Option<String> {
        let content = child_content(self.heading()?, 1)?;
        first_digit_run(&content).map(String::from)
    }

    /// Plane type, the first nested text of the heading.
    pub fn plane(&self) -> Option<String> {
        let inner = child_element(self.heading()?, 0)?;
        first_text(inner).map(String::from)
    }

    /// Raw track descriptor, decorative prefix removed.
    pub fn track_descriptor(&self) -> Option<String> {
        let panel = nth(self.root(), &SEL.info_panel, 2)?;
        let p = find(panel, &SEL.paragraph)?;
        let content = child_content(p, 1)?;
        Some(s!(skip_chars(&content, DESCRIPTOR_PREFIX)))
    }
}
