use super::mocks::MockInferenceClient;
use not_a_culture_fit::{
    content::ContentTables,
    interview::{InterviewDriver, RoundReport},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Build a driver over the builtin tables with a seeded RNG
pub fn create_test_driver(client: MockInferenceClient, seed: u64) -> InterviewDriver<StdRng> {
    InterviewDriver::new(
        Arc::new(client),
        Arc::new(ContentTables::builtin()),
        StdRng::seed_from_u64(seed),
    )
}

/// Answer every remaining question with `answer`, returning the reports
pub async fn answer_all(driver: &mut InterviewDriver<StdRng>, answer: &str) -> Vec<RoundReport> {
    let mut reports = Vec::new();
    while driver.accepts_answers() {
        reports.push(driver.answer(answer).await.expect("round should complete"));
    }
    reports
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
inference:
  server_url: "http://127.0.0.1:11434/"
  model: "mistral"
  timeout_secs: 30
  options:
    temperature: 0.5
    num_predict: 64

logs:
  level: "debug"
  json: true
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
inference:
  timeout_secs: "not-a-number"
"#;
