// src/core/sanitize.rs
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("digit run regex"));

/// First whitespace-delimited token, if any.
pub fn first_token(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

/// First run of ASCII/Unicode digits.
pub fn first_digit_run(s: &str) -> Option<&str> {
    DIGITS.find(s).map(|m| m.as_str())
}

/// Site dates are `DD.MM.YYYY`; the sheet wants `DD/MM/YY`.
pub fn reformat_date(s: &str) -> Option<String> {
    let d = NaiveDate::parse_from_str(s.trim(), "%d.%m.%Y").ok()?;
    Some(d.format("%d/%m/%y").to_string())
}

/// "Last First" → "First Last" (token order reversed, single spaces).
pub fn reverse_name(s: &str) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Drop a fixed number of leading characters (not bytes).
pub fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// Spreadsheet locale wants decimal commas.
pub fn decimal_comma(s: &str) -> String {
    s.replace('.', ",")
}
