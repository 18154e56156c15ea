//! `BaseAI` backed by the chat completions client.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::BaseAI;
use crate::config::Config;

/// Chat-completions LLM with a fixed model and sampling temperature.
pub struct OpenAIAdapter {
    /// `None` when no API key was configured; every call then fails
    client: Option<OpenAIClient>,
    model: String,
    temperature: f32,
}

impl OpenAIAdapter {
    pub fn new(client: Option<OpenAIClient>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }

    /// Azure when an endpoint is configured, the public OpenAI API otherwise.
    pub fn from_config(config: &Config) -> Self {
        let client = config.openai_api_key.as_ref().map(|key| {
            match &config.azure_openai_endpoint {
                Some(endpoint) => OpenAIClient::azure(
                    key.clone(),
                    endpoint.clone(),
                    config.azure_openai_deployment.clone(),
                    config.openai_api_version.clone(),
                ),
                None => OpenAIClient::new(key.clone()),
            }
        });

        Self::new(client, config.openai_model.clone(), config.report_temperature)
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY not set"))?;

        let request = ChatRequest::new(self.model.clone())
            .message(Message::user(prompt))
            .temperature(self.temperature);

        let response = client.chat_completion(request).await?;
        Ok(response.content)
    }
}
