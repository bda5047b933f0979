use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::config::constants::STATIC_FETCH_TIMEOUT_SECS;
use crate::network::errors::ExtractError;
use crate::network::identity::IdentityProfile;

// * Direct HTTP engine for the static tiers. A single connection pool is
// * shared across requests; the browser identity is re-rolled per fetch.
pub struct PageClient {
    inner: Client,
}

impl PageClient {
    pub fn new() -> Result<Self, ExtractError> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(STATIC_FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self { inner: client })
    }

    // * Fetches a page body with a freshly rotated identity.
    pub async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let mut headers = HeaderMap::new();
        IdentityProfile::random().apply_to_headers(&mut headers);

        let resp = self.inner.get(url).headers(headers).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(ExtractError::Http(status.as_u16()));
        }

        Ok(resp.text().await?)
    }
}

impl Default for PageClient {
    fn default() -> Self {
        // * Builder only fails on malformed TLS/proxy config, none of which
        // * is reachable from the fixed settings above.
        Self::new().expect("! CRITICAL: PageClient construction failed")
    }
}
