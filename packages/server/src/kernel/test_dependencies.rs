// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ResearchDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BasePageFetcher, BaseWebLocator, ResearchDeps};

// =============================================================================
// Mock Web Locator
// =============================================================================

pub struct MockWebLocator {
    result: Option<String>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockWebLocator {
    /// Locator that always finds `url`
    pub fn found(url: &str) -> Self {
        Self {
            result: Some(url.to_string()),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Locator whose lookup is always unavailable
    pub fn unavailable() -> Self {
        Self {
            result: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseWebLocator for MockWebLocator {
    async fn locate(&self, query: &str) -> Option<String> {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}

// =============================================================================
// Mock Page Fetcher
// =============================================================================

pub struct MockPageFetcher {
    html: Option<String>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn with_html(html: &str) -> Self {
        Self {
            html: Some(html.to_string()),
            fetched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fetcher that fails every request like a timeout would
    pub fn failing() -> Self {
        Self {
            html: None,
            fetched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.fetched.lock().unwrap().push(url.to_string());
        match &self.html {
            Some(html) => Ok(html.clone()),
            None => anyhow::bail!("operation timed out fetching {}", url),
        }
    }
}

// =============================================================================
// Mock AI
// =============================================================================

pub struct MockAI {
    response: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("API error: deployment not found"),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for `ResearchDeps` with mocks in every slot.
///
/// Defaults: lookup unavailable, fetch fails, AI answers "Test report",
/// template path that does not exist.
pub struct TestDependencies {
    pub web_locator: Arc<MockWebLocator>,
    pub page_fetcher: Arc<MockPageFetcher>,
    pub ai: Arc<MockAI>,
    pub docx_template_path: PathBuf,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            web_locator: Arc::new(MockWebLocator::unavailable()),
            page_fetcher: Arc::new(MockPageFetcher::failing()),
            ai: Arc::new(MockAI::with_response("Test report")),
            docx_template_path: PathBuf::from("missing-template.docx"),
        }
    }

    pub fn mock_locator(mut self, locator: MockWebLocator) -> Self {
        self.web_locator = Arc::new(locator);
        self
    }

    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.page_fetcher = Arc::new(fetcher);
        self
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.docx_template_path = path.into();
        self
    }

    /// Build deps; the mocks stay reachable through `self` for assertions.
    pub fn deps(&self) -> ResearchDeps {
        ResearchDeps::new(
            self.web_locator.clone(),
            self.page_fetcher.clone(),
            self.ai.clone(),
            self.docx_template_path.clone(),
        )
    }
}
