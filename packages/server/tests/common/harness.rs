//! Test harness with wiremock servers standing in for the outside world.
//!
//! Every test gets its own search engine and company site, so mocks never
//! leak between tests.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use research_core::kernel::test_dependencies::MockAI;
use research_core::kernel::{HttpPageFetcher, ResearchDeps, SearchEngineLocator};
use research_core::server::build_app;
use test_context::AsyncTestContext;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{search_results_page, TestClient};

/// Page fetch timeout used by the harness
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// Template shipped at the workspace root
pub fn model_template_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../ModelTemplate.docx")
}

/// Test harness that manages the mock servers.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     ctx.mount_search_result("Globex official site", &ctx.homepage_url("/")).await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub search_engine: MockServer,
    pub company_site: MockServer,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await
    }
}

impl TestHarness {
    pub async fn new() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            search_engine: MockServer::start().await,
            company_site: MockServer::start().await,
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.search_engine.uri())
    }

    pub fn homepage_url(&self, page: &str) -> String {
        format!("{}{}", self.company_site.uri(), page)
    }

    /// Answer `query` with a results page pointing at `href`
    pub async fn mount_search_result(&self, query: &str, href: &str) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_string(search_results_page(href)))
            .mount(&self.search_engine)
            .await;
    }

    pub async fn mount_search_response(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(response)
            .mount(&self.search_engine)
            .await;
    }

    pub async fn mount_homepage(&self, page: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(response)
            .mount(&self.company_site)
            .await;
    }

    /// Real HTTP adapters against the mock servers, with a scripted LLM
    pub fn deps(&self, ai: MockAI) -> (ResearchDeps, Arc<MockAI>) {
        let ai = Arc::new(ai);
        let deps = ResearchDeps::new(
            Arc::new(SearchEngineLocator::new(self.search_url()).expect("locator")),
            Arc::new(HttpPageFetcher::new(FETCH_TIMEOUT).expect("fetcher")),
            ai.clone(),
            model_template_path(),
        );
        (deps, ai)
    }

    /// Router over `deps(ai)` wrapped in a cookie-keeping client
    pub fn client(&self, ai: MockAI) -> (TestClient, Arc<MockAI>) {
        let (deps, ai) = self.deps(ai);
        (TestClient::new(build_app(deps)), ai)
    }
}
