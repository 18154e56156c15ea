//! Search-engine backed web locator
//!
//! Scrapes the public results page of a search engine and takes the first
//! organic result as the company's official website. There is no API key and
//! no retry; any change in the engine's result markup, a CAPTCHA page or a
//! network error simply yields no result.

use anyhow::{Context, Result};
use async_trait::async_trait;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use super::BaseWebLocator;

/// Default search endpoint
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Browser-like User-Agent sent with every outbound request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

lazy_static! {
    // Organic result container on the Google results page
    static ref RESULT_LINK_SELECTOR: Selector = Selector::parse("div.tF2Cxc a[href]").unwrap();
}

pub struct SearchEngineLocator {
    client: reqwest::Client,
    search_url: String,
}

impl SearchEngineLocator {
    pub fn new(search_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            search_url: search_url.into(),
        })
    }

    /// Results page URL for a query (`q` parameter, form-encoded)
    fn results_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(&self.search_url, &[("q", query)])
            .with_context(|| format!("Invalid search URL: {}", self.search_url))
    }

    /// href of the first anchor inside the first result container
    pub fn first_result_link(html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        document
            .select(&RESULT_LINK_SELECTOR)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .map(|href| href.to_string())
    }

    async fn search(&self, query: &str) -> Result<Option<String>> {
        let url = self.results_url(query)?;
        debug!(url = %url, "Querying search engine");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Search request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Search engine returned HTTP {}", status);
        }

        let html = response
            .text()
            .await
            .context("Failed to read search results")?;

        Ok(Self::first_result_link(&html))
    }
}

#[async_trait]
impl BaseWebLocator for SearchEngineLocator {
    async fn locate(&self, query: &str) -> Option<String> {
        match self.search(query).await {
            Ok(Some(link)) => {
                debug!(query = %query, link = %link, "Located website");
                Some(link)
            }
            Ok(None) => {
                info!(query = %query, "Lookup unavailable: no result in search page");
                None
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Lookup unavailable");
                None
            }
        }
    }
}
