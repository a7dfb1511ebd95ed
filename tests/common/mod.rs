// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use cpska_export::config::options::RunOptions;
use cpska_export::core::Fetch;
use cpska_export::{Error, Result};

/// Serves canned bodies by URL and records every request in order.
#[derive(Default)]
pub struct Scripted {
    bodies: HashMap<String, String>,
    pub asked: RefCell<Vec<String>>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn count(&self, url: &str) -> usize {
        self.asked.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Fetch for Scripted {
    fn fetch(&self, url: &str) -> Result<String> {
        self.asked.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status { url: url.to_string(), status: 404 })
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cpska_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn opts(out: PathBuf) -> RunOptions {
    RunOptions { out_dir: out, ..RunOptions::for_year("2023") }
}

pub fn detail_url(id: u32) -> String {
    format!("http://cpska.cz/public/index3.php?lpg=let&id={id}")
}

/// One listing row. Empty `points` renders an empty points cell.
pub fn row(id: u32, date: &str, pilot: &str, points: &str) -> String {
    let class = if id % 2 == 0 { "rowEven" } else { "rowOdd" };
    format!(
        r#"<tr class="{class}">
  <td class="cllDatum"><a href="index3.php?lpg=let&amp;id={id}">{date}</a></td>
  <td class="jmeno"><a href="index3.php?lpg=pilot&amp;p={id}">{pilot}</a></td>
  <td>Raná</td>
  <td class="cllVzdal">312.5 km</td>
  <td class="cllVzdal">85.2 km/h</td>
  <td class="cllBody">{points}</td>
  <td><a href="index3.php?lpg=let&amp;id={id}"><img src="lupa.gif"></a></td>
</tr>"#
    )
}

pub fn listing(rows: &[String]) -> String {
    format!(
        r#"<html><body><table class="tblList">
<tr class="rowHead"><th>Datum</th><th>Pilot</th><th>Místo</th><th>Trať</th><th>Rychlost</th><th>Body</th><th></th></tr>
{}
</table></body></html>"#,
        rows.join("\n")
    )
}

/// A listing page with `n` unscored rows (ids from `first_id`).
pub fn filler_listing(first_id: u32, n: usize) -> String {
    let rows: Vec<String> = (0..n as u32)
        .map(|i| row(first_id + i, "01.05.2023", "Pilot Test", ""))
        .collect();
    listing(&rows)
}

pub fn detail(plane: &str, registration: &str, track: &str, copilot: Option<&str>) -> String {
    let second = copilot
        .map(|c| format!(r#"<div class="panel_pilot"><div class="jmeno">{c}</div></div>"#))
        .unwrap_or_default();
    format!(
        r#"<html><body>
<div id="left">
<div class="panel_pilot"><div class="jmeno">Novák Petr</div></div>
{second}
</div>
<div id="right">
<h2><span>{plane}</span> {registration}</h2>
<div class="panel_lt"><p>Vzlet: 10:02</p></div>
<div class="panel_lt"><p>Přistání: 16:41</p></div>
<div class="panel_lt"><p><strong>Typ tratě</strong>: {track}</p></div>
</div>
</body></html>"#
    )
}
