use not_a_culture_fit::{
    config::InferenceConfig,
    interview::{FALLBACK_CRITIQUE, InterviewState, QUESTIONS_PER_INTERVIEW},
    llm::GenerationError,
    shell::{ConsoleRenderer, ConsoleShell},
};

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::io::{AsyncRead, BufReader, ReadBuf};
use tokio::sync::mpsc;

mod common;

use common::mocks::MockInferenceClient;
use common::test_utils::create_test_driver;

fn answers(count: usize, trailer: &str) -> Vec<u8> {
    let mut input = String::new();
    for i in 0..count {
        input.push_str(&format!("answer number {}\n", i + 1));
    }
    input.push_str(trailer);
    input.into_bytes()
}

async fn run_shell(client: MockInferenceClient, seed: u64, input: Vec<u8>) -> (String, InterviewState) {
    console::set_colors_enabled(false);

    let mut driver = create_test_driver(client, seed);
    let mut shell = ConsoleShell::new(input.as_slice(), ConsoleRenderer::new(Vec::new()));
    shell
        .run(&mut driver, &InferenceConfig::default())
        .await
        .unwrap();

    let output = String::from_utf8(shell.into_renderer().into_inner()).unwrap();
    (output, driver.state())
}

/// Scripted stdin that presses Ctrl-C once its lines run out.
struct InterruptingInput {
    data: Vec<u8>,
    pos: usize,
    interrupt: Option<mpsc::UnboundedSender<()>>,
}

impl AsyncRead for InterruptingInput {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        let this = &mut *self;
        if this.pos == this.data.len() {
            if let Some(tx) = this.interrupt.take() {
                let _ = tx.send(());
            }
            return Poll::Pending;
        }
        let n = (this.data.len() - this.pos).min(buf.remaining());
        buf.put_slice(&this.data[this.pos..this.pos + n]);
        this.pos += n;
        Poll::Ready(Ok(()))
    }
}

async fn run_until_interrupted(
    client: MockInferenceClient,
    seed: u64,
    input: Vec<u8>,
) -> (String, InterviewState) {
    console::set_colors_enabled(false);

    let (tx, rx) = mpsc::unbounded_channel();
    let input = BufReader::new(InterruptingInput {
        data: input,
        pos: 0,
        interrupt: Some(tx),
    });

    let mut driver = create_test_driver(client, seed);
    let mut shell =
        ConsoleShell::new(input, ConsoleRenderer::new(Vec::new())).with_interrupts(rx);
    shell
        .run(&mut driver, &InferenceConfig::default())
        .await
        .unwrap();

    let output = String::from_utf8(shell.into_renderer().into_inner()).unwrap();
    (output, driver.state())
}

#[tokio::test]
async fn test_console_full_interview_then_decline() {
    let client = MockInferenceClient::always("Spicy. Irrelevant, but spicy.");
    let (output, state) = run_shell(client, 21, answers(QUESTIONS_PER_INTERVIEW, "n\n")).await;

    assert!(output.contains("Not a Culture Fit — tiny AI interviewer (Ollama)"));
    assert!(output.contains("Model: llama3  •  Server: http://localhost:11434"));
    assert!(output.contains("Thank you for your time today."));
    for n in 1..=QUESTIONS_PER_INTERVIEW {
        assert!(output.contains(&format!("Q{}: ", n)), "missing Q{}", n);
    }
    assert!(!output.contains("Q11:"));
    assert_eq!(output.matches("Spicy. Irrelevant, but spicy.").count(), QUESTIONS_PER_INTERVIEW);
    assert_eq!(output.matches("Decision:").count(), 1);
    assert!(output.contains("Interview again? (Y/N): "));
    assert!(output.contains("Understood. We’ll circle back never. Have a compliant day."));
    assert_eq!(state, InterviewState::Terminated);
}

#[tokio::test]
async fn test_console_restart_runs_second_interview() {
    let client = MockInferenceClient::always("Noted.");
    let mut input = answers(QUESTIONS_PER_INTERVIEW, "YES\n");
    input.extend(answers(QUESTIONS_PER_INTERVIEW, "no\n"));

    let (output, state) = run_shell(client.clone(), 22, input).await;

    assert!(output.contains("Rebooting the hiring machine…"));
    assert_eq!(output.matches("Decision:").count(), 2);
    assert_eq!(output.matches("Thank you for your time today.").count(), 2);
    assert_eq!(client.get_prompts().len(), 2 * QUESTIONS_PER_INTERVIEW);
    assert_eq!(state, InterviewState::Terminated);
}

#[tokio::test]
async fn test_console_failures_show_fallback_and_diagnostic() {
    let client = MockInferenceClient::failing(GenerationError::Status {
        status: 404,
        message: "model 'llama3' not found".to_string(),
    });
    let (output, _) = run_shell(client, 23, answers(QUESTIONS_PER_INTERVIEW, "n\n")).await;

    assert_eq!(output.matches(FALLBACK_CRITIQUE).count(), QUESTIONS_PER_INTERVIEW);
    assert!(output.contains("[inference error: inference server returned HTTP 404"));
    assert_eq!(output.matches("Decision:").count(), 1);
}

#[tokio::test]
async fn test_console_eof_mid_interview_ends_session() {
    let client = MockInferenceClient::new();
    let (output, state) = run_shell(client.clone(), 24, answers(3, "")).await;

    assert!(output.contains("Q4: "));
    assert!(output.contains("[Session ended]"));
    assert!(output.contains("Goodbye."));
    assert!(!output.contains("Decision:"));
    assert_eq!(client.get_prompts().len(), 3);
    assert_eq!(state, InterviewState::Terminated);
}

#[tokio::test]
async fn test_console_eof_at_restart_prompt() {
    let client = MockInferenceClient::new();
    let (output, state) = run_shell(client, 25, answers(QUESTIONS_PER_INTERVIEW, "")).await;

    assert!(output.contains("Decision:"));
    assert!(output.trim_end().ends_with("Goodbye."));
    assert_eq!(state, InterviewState::Terminated);
}

#[tokio::test]
async fn test_console_blank_line_is_answered_with_placeholder() {
    let client = MockInferenceClient::new();
    let mut input = b"\n".to_vec();
    input.extend(answers(QUESTIONS_PER_INTERVIEW - 1, "n\n"));

    run_shell(client.clone(), 26, input).await;

    let prompts = client.get_prompts();
    assert!(prompts[0].contains("CANDIDATE_ANSWER: [Candidate stares into middle distance]"));
    assert!(prompts[1].contains("CANDIDATE_ANSWER: answer number 1"));
}

#[tokio::test]
async fn test_console_interrupt_at_answer_prompt_ends_session() {
    let client = MockInferenceClient::always("Noted.");
    let (output, state) = run_until_interrupted(client.clone(), 27, answers(2, "")).await;

    assert_eq!(output.matches("Noted.").count(), 2);
    assert!(output.contains("Q3: "));
    assert!(output.contains("[Session ended]"));
    assert!(output.trim_end().ends_with("Goodbye."));
    assert!(!output.contains("Decision:"));
    assert_eq!(client.get_prompts().len(), 2);
    assert_eq!(state, InterviewState::Terminated);
}

#[tokio::test]
async fn test_console_interrupt_at_restart_prompt_says_goodbye() {
    let client = MockInferenceClient::new();
    let (output, state) =
        run_until_interrupted(client, 28, answers(QUESTIONS_PER_INTERVIEW, "")).await;

    assert_eq!(output.matches("Decision:").count(), 1);
    assert!(output.contains("Interview again? (Y/N): "));
    assert!(output.trim_end().ends_with("Goodbye."));
    assert!(!output.contains("[Session ended]"));
    assert!(!output.contains("circle back never"));
    assert_eq!(state, InterviewState::Terminated);
}

#[tokio::test]
async fn test_console_interrupt_while_scoring_ends_session() {
    console::set_colors_enabled(false);

    let client = MockInferenceClient::always("Too late.").with_delay(Duration::from_secs(60));
    let (tx, rx) = mpsc::unbounded_channel();
    let watcher = client.clone();
    tokio::spawn(async move {
        while watcher.get_prompts().is_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let _ = tx.send(());
    });

    let mut driver = create_test_driver(client.clone(), 29);
    let input = answers(1, "");
    let mut shell = ConsoleShell::new(input.as_slice(), ConsoleRenderer::new(Vec::new()))
        .with_interrupts(rx);
    shell
        .run(&mut driver, &InferenceConfig::default())
        .await
        .unwrap();

    let output = String::from_utf8(shell.into_renderer().into_inner()).unwrap();
    assert!(output.contains("[Session ended]"));
    assert!(output.trim_end().ends_with("Goodbye."));
    assert!(!output.contains("Too late."));
    assert_eq!(client.get_prompts().len(), 1);
    assert_eq!(driver.state(), InterviewState::Terminated);
}

#[tokio::test]
async fn test_console_invalid_utf8_answer_does_not_abort() {
    let client = MockInferenceClient::new();
    let mut input = b"caf\xff au lait\n".to_vec();
    input.extend(answers(QUESTIONS_PER_INTERVIEW - 1, "n\n"));

    let (output, state) = run_shell(client.clone(), 30, input).await;

    let prompts = client.get_prompts();
    assert_eq!(prompts.len(), QUESTIONS_PER_INTERVIEW);
    assert!(prompts[0].contains("CANDIDATE_ANSWER: caf\u{FFFD} au lait"));
    assert_eq!(output.matches("Decision:").count(), 1);
    assert_eq!(state, InterviewState::Terminated);
}
