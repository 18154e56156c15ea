//! Pure OpenAI / Azure OpenAI chat completions client
//!
//! A minimal client for the chat completions endpoint with no domain-specific
//! logic. Talks either to the public OpenAI API or to an Azure OpenAI
//! deployment; the request and response shapes are the same, only routing and
//! authentication differ.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{ChatRequest, Message, OpenAIClient};
//!
//! let client = OpenAIClient::azure(api_key, "https://acme.openai.azure.com", "gpt-4o", "2024-06-01");
//!
//! let response = client
//!     .chat_completion(
//!         ChatRequest::new("gpt-4o")
//!             .message(Message::user("Hello!"))
//!             .temperature(0.7),
//!     )
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Where chat completion requests are routed.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// OpenAI-compatible API, `Authorization: Bearer` auth
    OpenAI { base_url: String },
    /// Azure OpenAI deployment, `api-key` header auth
    Azure {
        endpoint: String,
        deployment: String,
        api_version: String,
    },
}

impl Endpoint {
    /// Full URL of the chat completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        match self {
            Endpoint::OpenAI { base_url } => {
                format!("{}/chat/completions", base_url.trim_end_matches('/'))
            }
            Endpoint::Azure {
                endpoint,
                deployment,
                api_version,
            } => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                deployment,
                api_version
            ),
        }
    }
}

/// Chat completions API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    endpoint: Endpoint,
}

impl OpenAIClient {
    /// Create a client for the public OpenAI API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            endpoint: Endpoint::OpenAI {
                base_url: OPENAI_BASE_URL.to_string(),
            },
        }
    }

    /// Create a client for an Azure OpenAI deployment.
    pub fn azure(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        deployment: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            endpoint: Endpoint::Azure {
                endpoint: endpoint.into(),
                deployment: deployment.into(),
                api_version: api_version.into(),
            },
        }
    }

    /// Set a custom base URL (proxies, local gateways). Only applies to OpenAI mode.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        if let Endpoint::OpenAI { base_url } = &mut self.endpoint {
            *base_url = url.into();
        }
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get the first choice back.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();
        let url = self.endpoint.chat_completions_url();

        let builder = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json");
        let builder = match &self.endpoint {
            Endpoint::OpenAI { .. } => {
                builder.header("Authorization", format!("Bearer {}", self.api_key))
            }
            Endpoint::Azure { .. } => builder.header("api-key", &self.api_key),
        };

        let response = builder.json(&request).send().await.map_err(|e| {
            warn!(error = %e, "Chat completion request failed");
            OpenAIError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(OpenAIError::Api(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAIError::Api("No choices in response".into()))?;

        let content = choice.message.content.ok_or_else(|| {
            OpenAIError::Api(format!(
                "Empty completion (finish_reason: {})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        })
    }

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key(), "sk-test");
        assert_eq!(
            client.endpoint().chat_completions_url(),
            "https://custom.api.com/chat/completions"
        );
    }

    #[test]
    fn test_azure_url() {
        let client = OpenAIClient::azure(
            "key",
            "https://acme.openai.azure.com/",
            "gpt-4o",
            "2024-06-01",
        );

        assert_eq!(
            client.endpoint().chat_completions_url(),
            "https://acme.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-06-01"
        );
    }

    #[test]
    fn test_base_url_ignored_for_azure() {
        let client = OpenAIClient::azure("key", "https://a.example", "d", "v")
            .with_base_url("https://other.example");

        assert!(matches!(client.endpoint(), Endpoint::Azure { .. }));
    }

    #[tokio::test]
    async fn test_openai_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hello")))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAIClient::new("sk-test").with_base_url(server.uri());
        let response = client
            .chat_completion(ChatRequest::new("gpt-4o").message(Message::user("Hi")))
            .await
            .unwrap();

        assert_eq!(response.content, "Hello");
        assert_eq!(response.usage.unwrap().total_tokens, 15);
    }

    #[tokio::test]
    async fn test_azure_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/deployments/gpt-4o/chat/completions"))
            .and(query_param("api-version", "2024-06-01"))
            .and(header("api-key", "azure-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Report")))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAIClient::azure("azure-key", server.uri(), "gpt-4o", "2024-06-01");
        let response = client
            .chat_completion(ChatRequest::new("gpt-4o").message(Message::user("Hi")))
            .await
            .unwrap();

        assert_eq!(response.content, "Report");
    }

    #[tokio::test]
    async fn test_api_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let client = OpenAIClient::new("bad").with_base_url(server.uri());
        let err = client
            .chat_completion(ChatRequest::new("gpt-4o").message(Message::user("Hi")))
            .await
            .unwrap_err();

        match err {
            OpenAIError::Api(msg) => assert!(msg.contains("invalid key")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
            .mount(&server)
            .await;

        let client = OpenAIClient::new("sk").with_base_url(server.uri());
        let result = client
            .chat_completion(ChatRequest::new("gpt-4o").message(Message::user("Hi")))
            .await;

        assert!(matches!(result, Err(OpenAIError::Api(_))));
    }
}
