pub mod prompt;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::AzureOpenAiConfig;
use crate::web::models::Message;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion client is not configured: {0} is not set")]
    NotConfigured(&'static str),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Sampling settings sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
            top_p: 0.95,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Anything that can turn a chat transcript into the assistant's reply text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, CompletionError>;
}

/// Client for an Azure OpenAI chat-completion deployment.
pub struct AzureOpenAiClient {
    config: AzureOpenAiConfig,
    client: Client,
}

impl AzureOpenAiClient {
    pub fn new(config: AzureOpenAiConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: AzureOpenAiConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn deployment(&self) -> Result<&str, CompletionError> {
        self.config
            .deployment
            .as_deref()
            .ok_or(CompletionError::NotConfigured("AZUREOPENAIDEPLOYMENTNAME"))
    }

    fn completions_url(&self) -> Result<String, CompletionError> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or(CompletionError::NotConfigured("AZUREOPENAIENDPOINT"))?;

        Ok(format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            self.deployment()?,
            self.config.api_version
        ))
    }
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, CompletionError> {
        let url = self.completions_url()?;
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::NotConfigured("AZUREOPENAIKEY"))?;

        let payload = json!({
            "model": self.deployment()?,
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "top_p": params.top_p,
            "frequency_penalty": params.frequency_penalty,
            "presence_penalty": params.presence_penalty,
        });

        info!("Sending chat completion request with max_tokens: {}", params.max_tokens);
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .header("api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;
        debug!("Response JSON: {}", response_json);

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                CompletionError::MalformedResponse(
                    "no content in choices[0].message".to_string(),
                )
            })?;

        info!("Response length: {} characters", content.chars().count());
        Ok(content.to_string())
    }
}
