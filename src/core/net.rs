// src/core/net.rs
// Blocking HTTP GET. One request at a time, no retries.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Source of raw page bodies. The pipeline only ever needs "GET this URL".
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| Error::Http { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    /// GET `url` and return the body decoded per the response charset.
    fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {url}");
        let http_err = |source: reqwest::Error| Error::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(http_err)
    }
}
