use async_trait::async_trait;
use not_a_culture_fit::llm::{GenerationError, InferenceClient};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock inference client for testing
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub responses: Arc<Mutex<Vec<Result<String, GenerationError>>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub fallback: Result<String, GenerationError>,
    pub delay: Option<Duration>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self::always("Bold strategy. Wrong, but bold.")
    }

    /// Answers every prompt with the same text.
    pub fn always(text: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fallback: Ok(text.to_string()),
            delay: None,
        }
    }

    /// Fails every prompt with the same error.
    pub fn failing(error: GenerationError) -> Self {
        let mut client = Self::new();
        client.fallback = Err(error);
        client
    }

    /// Queued responses are used in order before falling back.
    pub fn with_responses(self, responses: Vec<Result<String, GenerationError>>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return self.fallback.clone();
        }
        responses.remove(0)
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
