use super::types::*;
use crate::{Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Turns a prompt into a trimmed completion. No retries.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    options: GenerationOptions,
    timeout_secs: u64,
}

impl OllamaClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/generate", config.server_url.trim_end_matches('/')),
            model: config.model.clone(),
            options: config.options,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn map_transport_error(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            GenerationError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let request = GenerationRequest::new(&self.model, prompt, self.options);

        debug!(
            "Posting generate request to {} (model {}, {} prompt bytes)",
            self.endpoint,
            self.model,
            prompt.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ServerErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = serde_json::from_slice(&body)
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;

        debug!(
            "Received generate response (done: {}, model: {:?})",
            parsed.done, parsed.model
        );

        Ok(parsed.response.unwrap_or_default().trim().to_string())
    }
}
