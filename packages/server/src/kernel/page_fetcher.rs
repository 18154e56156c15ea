//! Single-page HTTP fetcher with a bounded timeout.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::{BasePageFetcher, BROWSER_USER_AGENT};

/// Redirect hops followed before a fetch gives up
pub const MAX_REDIRECTS: usize = 30;

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Normalize URL by adding https:// if no scheme is present
    fn normalize_url(url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    /// Error pages are still returned: whatever HTML came back gets scanned.
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = Self::normalize_url(url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {}", url))?;

        let status = response.status();
        debug!(url = %url, status = %status, "Fetched page");

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
