// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "https://www.cpska.cz/public/index3.php?lpg=sezlet&filtr=clubs&filtr_soutez=all&filtr_trida=&filtr_zeme=cz&filtr_clubs=5&filtr_minclubs=5&filtr_pilot=all&filtr_glider=all";
pub const DETAIL_BASE: &str = "http://cpska.cz/public/";
pub const USER_AGENT: &str = concat!("cpska_export/", env!("CARGO_PKG_VERSION"));

// Listing
pub const PAGE_SIZE: usize = 100;
pub const MAX_PAGES: usize = 8; // bounds requests if the site never returns an empty page
pub const DEFAULT_YEAR: &str = "2023";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const OUT_EXT: &str = "txt";
pub const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
