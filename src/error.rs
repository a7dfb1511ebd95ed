// src/error.rs
use thiserror::Error;

use crate::specs::flight::ExtractError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("listing row has no detail link")]
    MissingLink,

    #[error("flight {url}: {source}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
