//! Research dependencies (using traits for testability)
//!
//! Central dependency container handed to every domain action. All external
//! services sit behind trait objects so tests can swap in mocks.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{
    BaseAI, BasePageFetcher, BaseWebLocator, HttpPageFetcher, OpenAIAdapter, SearchEngineLocator,
};

#[derive(Clone)]
pub struct ResearchDeps {
    pub web_locator: Arc<dyn BaseWebLocator>,
    pub page_fetcher: Arc<dyn BasePageFetcher>,
    /// LLM used for report generation
    pub ai: Arc<dyn BaseAI>,
    /// `.docx` template the report is poured into
    pub docx_template_path: PathBuf,
}

impl ResearchDeps {
    pub fn new(
        web_locator: Arc<dyn BaseWebLocator>,
        page_fetcher: Arc<dyn BasePageFetcher>,
        ai: Arc<dyn BaseAI>,
        docx_template_path: PathBuf,
    ) -> Self {
        Self {
            web_locator,
            page_fetcher,
            ai,
            docx_template_path,
        }
    }

    /// Production wiring
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Arc::new(SearchEngineLocator::new(config.search_base_url.clone())?),
            Arc::new(HttpPageFetcher::new(config.fetch_timeout)?),
            Arc::new(OpenAIAdapter::from_config(config)),
            config.docx_template_path.clone(),
        ))
    }
}
