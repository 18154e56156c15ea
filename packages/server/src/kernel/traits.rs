// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Extraction rules and report assembly live in the domains and use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseWebLocator)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Web Locator Trait (Infrastructure - search engine lookup)
// =============================================================================

#[async_trait]
pub trait BaseWebLocator: Send + Sync {
    /// Presumed official website for a free-text query.
    ///
    /// `None` is the single "lookup unavailable" outcome: no result, a blocked
    /// request and a network failure all look the same to the caller.
    async fn locate(&self, query: &str) -> Option<String>;
}

// =============================================================================
// Page Fetcher Trait (Infrastructure - raw HTML retrieval)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch the raw HTML body of a page
    async fn fetch(&self, url: &str) -> Result<String>;
}

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;
}
