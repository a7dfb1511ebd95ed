// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Everything one export run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Season to export, as it appears in the `obdobi_rok` query parameter.
    pub year: String,
    /// Directory the timestamped output file is created in.
    pub out_dir: PathBuf,
    /// Upper bound on listing pages requested, even if none comes back empty.
    pub max_pages: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            year: s!(DEFAULT_YEAR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            max_pages: MAX_PAGES,
        }
    }
}

impl RunOptions {
    pub fn for_year(year: &str) -> Self {
        Self { year: s!(year), ..Self::default() }
    }

    pub fn listing_url(&self, offset: usize) -> String {
        format!(
            "{LISTING_URL}&obdobi_rok={}&obdobi_mesic=00&obdobi_den=00&strankovani={offset}",
            self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_carries_year_and_offset() {
        let opts = RunOptions::for_year("2021");
        let url = opts.listing_url(300);
        assert!(url.starts_with("https://www.cpska.cz/public/index3.php?lpg=sezlet"));
        assert!(url.contains("&obdobi_rok=2021&"));
        assert!(url.ends_with("&strankovani=300"));
    }

    #[test]
    fn defaults_match_site_conventions() {
        let opts = RunOptions::default();
        assert_eq!(opts.year, "2023");
        assert_eq!(opts.max_pages, 8);
    }
}
