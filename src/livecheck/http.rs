//! Release index over HTTP

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::error::{Result, download};

use super::ReleaseIndex;

/// Identifies caskr to upstream servers; the GitHub API rejects requests
/// without a user agent
pub const USER_AGENT: &str = concat!("caskr/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client shared by livecheck and downloads
pub fn build_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json, text/html;q=0.9, */*;q=0.8"),
    );

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| download::failed("(client)", format!("failed to build HTTP client: {e}")))
}

/// [`ReleaseIndex`] backed by a blocking `reqwest` client
pub struct HttpReleaseIndex {
    client: Client,
}

impl HttpReleaseIndex {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }
}

impl ReleaseIndex for HttpReleaseIndex {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download::failed(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download::failed(url, format!("HTTP {}", status.as_u16())));
        }

        response
            .text()
            .map_err(|e| download::failed(url, format!("failed to read response body: {e}")))
    }
}
