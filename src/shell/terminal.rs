use super::Renderer;
use crate::{
    Result,
    config::InferenceConfig,
    interview::{InterviewDriver, NextStep, RoundRecord, Session},
};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

const RULE_WIDTH: usize = 68;
const WRAP_WIDTH: usize = 80;

/// Plain-text renderer for a terminal or any other writer.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn banner(&mut self, config: &InferenceConfig) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, " Not a Culture Fit — tiny AI interviewer (Ollama) ")?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.out,
            "{}",
            style(format!(
                "Model: {}  •  Server: {}",
                config.model, config.server_url
            ))
            .dim()
        )
    }

    fn welcome(&mut self, session: &Session) -> io::Result<()> {
        let greeting = format!(
            "Thank you for your time today. You’re being considered for a position at {}. \
             I’m the Hiring Manager, {}.",
            session.company(),
            session.manager()
        );
        writeln!(self.out)?;
        writeln!(self.out, "{}", textwrap::fill(&greeting, WRAP_WIDTH))?;
        writeln!(self.out)
    }

    fn question(&mut self, number: usize, question: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", style(format!("Q{}:", number)).bold(), question)
    }

    fn answer_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "You: ")?;
        self.out.flush()
    }

    fn critique(&mut self, manager: &str, record: &RoundRecord) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} {}",
            style(format!("{}:", manager)).cyan().bold(),
            record.critique
        )?;
        if let Some(ref failure) = record.failure {
            writeln!(self.out, "{}", style(format!("[inference error: {}]", failure)).dim())?;
        }
        writeln!(self.out)
    }

    fn decision(&mut self, reason: &str) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(self.out, "{}", style("Decision:").bold())?;
        writeln!(self.out, "{}", reason)?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    fn restart_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Interview again? (Y/N): ")?;
        self.out.flush()
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}

enum InterviewOutcome {
    Concluded,
    Abandoned,
}

enum Input {
    Line(String),
    Closed,
    Interrupted,
}

/// Resolves on the next interrupt, or never when none can arrive.
async fn interrupted(interrupts: &mut Option<mpsc::UnboundedReceiver<()>>) {
    if let Some(rx) = interrupts {
        if rx.recv().await.is_some() {
            return;
        }
    }
    std::future::pending::<()>().await
}

/// Line-oriented interview loop: ask, read, score, repeat, then offer a restart.
pub struct ConsoleShell<I, D> {
    input: I,
    renderer: D,
    interrupts: Option<mpsc::UnboundedReceiver<()>>,
    spinner: bool,
}

impl<I, D> ConsoleShell<I, D>
where
    I: AsyncBufRead + Unpin,
    D: Renderer,
{
    pub fn new(input: I, renderer: D) -> Self {
        Self {
            input,
            renderer,
            interrupts: None,
            spinner: false,
        }
    }

    /// Let Ctrl-C end the session at either prompt or while a critique is
    /// outstanding. Must be called from within a tokio runtime.
    pub fn interruptible(self, enabled: bool) -> Self {
        if !enabled {
            return self;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        self.with_interrupts(rx)
    }

    /// Treat every message on `interrupts` as Ctrl-C.
    pub fn with_interrupts(mut self, interrupts: mpsc::UnboundedReceiver<()>) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    /// Show a spinner on stderr while waiting (only when stderr is a terminal).
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }

    pub fn into_renderer(self) -> D {
        self.renderer
    }

    pub async fn run<R: Rng>(
        &mut self,
        driver: &mut InterviewDriver<R>,
        config: &InferenceConfig,
    ) -> Result<()> {
        self.renderer.banner(config)?;

        loop {
            if let InterviewOutcome::Abandoned = self.interview_once(driver).await? {
                self.renderer.notice("Goodbye.")?;
                return Ok(());
            }

            self.renderer.restart_prompt()?;
            let Input::Line(reply) = self.read_line().await? else {
                self.renderer.notice("")?;
                self.renderer.notice("Goodbye.")?;
                driver.terminate()?;
                return Ok(());
            };

            if matches!(reply.to_lowercase().as_str(), "y" | "yes") {
                self.renderer.notice("")?;
                self.renderer.notice("Rebooting the hiring machine…")?;
                self.renderer.notice("")?;
                driver.restart()?;
            } else {
                self.renderer
                    .notice("Understood. We’ll circle back never. Have a compliant day.")?;
                driver.terminate()?;
                return Ok(());
            }
        }
    }

    async fn interview_once<R: Rng>(
        &mut self,
        driver: &mut InterviewDriver<R>,
    ) -> Result<InterviewOutcome> {
        self.renderer.welcome(driver.session())?;

        let manager = driver.session().manager().to_string();
        let mut number = 1;
        let mut question = driver.begin()?.to_string();

        loop {
            self.renderer.question(number, &question)?;
            self.renderer.answer_prompt()?;

            let Input::Line(answer) = self.read_line().await? else {
                return self.abandon(driver);
            };

            driver.submit_answer(&answer)?;
            let spinner = self.start_spinner(&manager);

            let delivered = tokio::select! {
                report = driver.next_result() => Some(report),
                () = interrupted(&mut self.interrupts) => None,
            };

            if let Some(ref bar) = spinner {
                bar.finish_and_clear();
            }

            let Some(report) = delivered else {
                info!("Interrupted while waiting for round {} critique", number);
                return self.abandon(driver);
            };
            let report = report?;

            self.renderer.critique(&manager, &report.record)?;

            match report.next {
                NextStep::Question {
                    number: next_number,
                    question: next_question,
                } => {
                    number = next_number;
                    question = next_question;
                }
                NextStep::Decision { reason } => {
                    self.renderer.decision(&reason)?;
                    return Ok(InterviewOutcome::Concluded);
                }
            }
        }
    }

    fn abandon<R: Rng>(&mut self, driver: &mut InterviewDriver<R>) -> Result<InterviewOutcome> {
        self.renderer.notice("")?;
        self.renderer.notice("[Session ended]")?;
        driver.terminate()?;
        Ok(InterviewOutcome::Abandoned)
    }

    async fn read_line(&mut self) -> Result<Input> {
        let mut buf = Vec::new();
        let read = tokio::select! {
            read = self.input.read_until(b'\n', &mut buf) => read?,
            () = interrupted(&mut self.interrupts) => {
                info!("Interrupted at prompt");
                return Ok(Input::Interrupted);
            }
        };
        if read == 0 {
            debug!("Input closed");
            return Ok(Input::Closed);
        }
        Ok(Input::Line(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn start_spinner(&self, manager: &str) -> Option<ProgressBar> {
        if !self.spinner || !console::Term::stderr().is_term() {
            return None;
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .template("{spinner} {msg}")
        {
            bar.set_style(spinner_style);
        }
        bar.set_message(format!("{} is scoring your answer…", manager));
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    }
}
