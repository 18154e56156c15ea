//! Kernel module - research infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod page_fetcher;
pub mod test_dependencies;
pub mod traits;
pub mod web_locator;

pub use ai::OpenAIAdapter;
pub use deps::ResearchDeps;
pub use page_fetcher::HttpPageFetcher;
pub use test_dependencies::TestDependencies;
pub use traits::*;
pub use web_locator::{SearchEngineLocator, BROWSER_USER_AGENT, GOOGLE_SEARCH_URL};
