//! Azure OpenAI chat-completion client.
//!
//! Wraps `POST {endpoint}/openai/deployments/{deployment}/chat/completions`
//! using [`reqwest`]. The deployment name stands in for the model id.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::{ChatClient, ChatRequest};
use crate::config::LlmConfig;
use crate::error::LlmError;

/// HTTP client for one Azure OpenAI deployment.
pub struct AzureOpenAiClient {
    client: reqwest::Client,
    completions_url: String,
    api_key: String,
}

/// Subset of the chat-completion response we read.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl AzureOpenAiClient {
    /// Create a client from configuration, building a dedicated
    /// [`reqwest::Client`] with the configured per-call timeout.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            completions_url: completions_url(config),
            api_key: config.api_key.clone(),
        })
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise capture the
    /// status and body text in an [`LlmError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ChatClient for AzureOpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.completions_url)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        let text = extract_completion(&bytes)?;

        tracing::debug!(chars = text.len(), "Chat completion received");
        Ok(text)
    }
}

/// Full completions URL for the configured deployment and API version.
fn completions_url(config: &LlmConfig) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        config.endpoint, config.deployment, config.api_version
    )
}

/// Pull the trimmed text of the first choice out of a response body.
fn extract_completion(body: &[u8]) -> Result<String, LlmError> {
    let parsed: CompletionResponse =
        serde_json::from_slice(body).map_err(|e| LlmError::Decode(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|content| content.trim().to_string())
        .ok_or(LlmError::EmptyResponse)
}
