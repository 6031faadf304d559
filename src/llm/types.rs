use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::config::GenerationOptions;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, options: GenerationOptions) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options,
        }
    }
}

/// The parts of a non-streaming generate response we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Error payload the server sends alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerErrorBody {
    pub error: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("could not reach inference server: {0}")]
    Network(String),

    #[error("inference server did not answer within {secs}s")]
    Timeout { secs: u64 },

    #[error("inference server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response from inference server: {0}")]
    MalformedPayload(String),
}
