use super::fsm::{InterviewEvent, InterviewState, InterviewStateMachine};
use super::prompt::build_critique_prompt;
use super::sampler::sample_questions;
use super::session::{QUESTIONS_PER_INTERVIEW, RoundRecord, Session, normalize_answer};
use crate::{
    Error, Result,
    content::ContentTables,
    identity::{generate_company, generate_manager},
    llm::{GenerationError, InferenceClient},
};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Outcome of one inference call, posted back onto the driver's queue.
#[derive(Debug, Clone)]
pub struct ScoringResult {
    pub session_id: Uuid,
    pub round: usize,
    pub question: String,
    pub answer: String,
    pub outcome: std::result::Result<String, GenerationError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NextStep {
    /// `number` is 1-based.
    Question { number: usize, question: String },
    Decision { reason: String },
}

#[derive(Debug, Clone)]
pub struct RoundReport {
    /// 1-based round number.
    pub number: usize,
    pub record: RoundRecord,
    pub next: NextStep,
}

/// Owns the single active session and sequences it through the interview.
///
/// Inference calls run on spawned tasks. Their results come back through a
/// single-consumer queue and only [`InterviewDriver::deliver`] applies them,
/// so session state is never touched concurrently.
pub struct InterviewDriver<R = StdRng> {
    machine: InterviewStateMachine,
    session: Session,
    decision: Option<String>,
    tables: Arc<ContentTables>,
    client: Arc<dyn InferenceClient>,
    rng: R,
    results_tx: mpsc::UnboundedSender<ScoringResult>,
    results_rx: mpsc::UnboundedReceiver<ScoringResult>,
}

impl<R: Rng> InterviewDriver<R> {
    pub fn new(client: Arc<dyn InferenceClient>, tables: Arc<ContentTables>, mut rng: R) -> Self {
        let session = Self::fresh_session(&mut rng, &tables);
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        info!(
            "New interview {} at {} with {}",
            session.id(),
            session.company(),
            session.manager()
        );

        Self {
            machine: InterviewStateMachine::new(QUESTIONS_PER_INTERVIEW),
            session,
            decision: None,
            tables,
            client,
            rng,
            results_tx,
            results_rx,
        }
    }

    fn fresh_session(rng: &mut R, tables: &ContentTables) -> Session {
        let company = generate_company(rng, tables);
        let manager = generate_manager(rng, tables);
        Session::new(company, manager)
    }

    pub fn state(&self) -> InterviewState {
        self.machine.current_state()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn decision(&self) -> Option<&str> {
        self.decision.as_deref()
    }

    pub fn accepts_answers(&self) -> bool {
        self.machine.accepts_answers()
    }

    /// The question waiting for an answer, if any.
    pub fn current_question(&self) -> Option<&str> {
        match self.state() {
            InterviewState::AwaitingAnswer(i) => self.session.questions().get(i).map(String::as_str),
            _ => None,
        }
    }

    /// Samples this session's questions and moves to the first one.
    pub fn begin(&mut self) -> Result<&str> {
        self.machine.next_state(InterviewEvent::Begin)?;

        let questions = sample_questions(
            &mut self.rng,
            self.tables.questions(),
            self.machine.total_rounds(),
        )?;
        self.session.set_questions(questions);
        self.machine.transition(InterviewEvent::Begin)?;

        info!(
            "Interview {} started with {} questions",
            self.session.id(),
            self.session.questions().len()
        );

        self.current_question()
            .ok_or_else(|| Error::internal("no question available after sampling"))
    }

    /// Accepts an answer and dispatches its critique on a background task.
    ///
    /// Must be called from within a tokio runtime. Further answers are
    /// rejected until the result has been delivered.
    pub fn submit_answer(&mut self, raw_answer: &str) -> Result<()> {
        let round = match self.machine.next_state(InterviewEvent::AnswerSubmitted)? {
            InterviewState::Scoring(i) => i,
            other => {
                return Err(Error::internal(format!(
                    "answer submission would lead to {:?}",
                    other
                )));
            }
        };

        let question = self
            .session
            .questions()
            .get(round)
            .cloned()
            .ok_or_else(|| Error::internal(format!("missing question for round {}", round)))?;
        let answer = normalize_answer(raw_answer);
        let prompt = build_critique_prompt(
            self.session.company(),
            self.session.manager(),
            &question,
            &answer,
        );

        self.machine.transition(InterviewEvent::AnswerSubmitted)?;

        let client = Arc::clone(&self.client);
        let results_tx = self.results_tx.clone();
        let session_id = self.session.id();

        debug!("Dispatching critique for round {} of {}", round + 1, session_id);

        tokio::spawn(async move {
            let outcome = client.generate(&prompt).await;
            let result = ScoringResult {
                session_id,
                round,
                question,
                answer,
                outcome,
            };
            if results_tx.send(result).is_err() {
                debug!("Driver gone before round {} result was delivered", round + 1);
            }
        });

        Ok(())
    }

    /// Applies a scoring result. This is the only way back into the state machine
    /// after an answer has been submitted.
    pub fn deliver(&mut self, result: ScoringResult) -> Result<RoundReport> {
        let round = match self.state() {
            InterviewState::Scoring(i) => Some(i),
            _ => None,
        };

        if round != Some(result.round) || result.session_id != self.session.id() {
            warn!(
                "Dropping stale scoring result for session {} round {}",
                result.session_id,
                result.round + 1
            );
            return Err(Error::StaleResult {
                session_id: result.session_id.to_string(),
                round: result.round,
            });
        }

        if let Err(ref e) = result.outcome {
            warn!("Critique for round {} failed: {}", result.round + 1, e);
        }

        let record = RoundRecord::from_outcome(result.question, result.answer, result.outcome);
        self.session.record(record.clone());
        self.machine.transition(InterviewEvent::CritiqueDelivered)?;

        let next = match self.state() {
            InterviewState::AwaitingAnswer(i) => NextStep::Question {
                number: i + 1,
                question: self.session.questions()[i].clone(),
            },
            _ => {
                let reason = self
                    .tables
                    .rejection_reasons()
                    .choose(&mut self.rng)
                    .cloned()
                    .unwrap_or_default();
                info!(
                    "Interview {} concluded after {} rounds in {}s",
                    self.session.id(),
                    self.session.rounds().len(),
                    self.session.elapsed().map_or(0, |d| d.num_seconds())
                );
                self.decision = Some(reason.clone());
                NextStep::Decision { reason }
            }
        };

        Ok(RoundReport {
            number: result.round + 1,
            record,
            next,
        })
    }

    /// Waits for the outstanding critique and applies it.
    pub async fn next_result(&mut self) -> Result<RoundReport> {
        if !matches!(self.state(), InterviewState::Scoring(_)) {
            return Err(Error::InvalidTransition {
                current: format!("{:?}", self.state()),
                requested: format!("{:?}", InterviewEvent::CritiqueDelivered),
            });
        }

        loop {
            let result = self
                .results_rx
                .recv()
                .await
                .ok_or_else(|| Error::internal("scoring queue closed"))?;
            match self.deliver(result) {
                Err(Error::StaleResult { .. }) => continue,
                other => return other,
            }
        }
    }

    /// Applies a finished critique if one is queued, without waiting.
    pub fn poll_result(&mut self) -> Option<Result<RoundReport>> {
        match self.results_rx.try_recv() {
            Ok(result) => Some(self.deliver(result)),
            Err(_) => None,
        }
    }

    /// Submits an answer and waits for its critique.
    pub async fn answer(&mut self, raw_answer: &str) -> Result<RoundReport> {
        self.submit_answer(raw_answer)?;
        self.next_result().await
    }

    /// Discards the finished session and starts over at `Welcome`.
    pub fn restart(&mut self) -> Result<()> {
        self.machine.transition(InterviewEvent::Restart)?;

        while self.results_rx.try_recv().is_ok() {}

        self.session = Self::fresh_session(&mut self.rng, &self.tables);
        self.decision = None;

        info!(
            "New interview {} at {} with {}",
            self.session.id(),
            self.session.company(),
            self.session.manager()
        );
        Ok(())
    }

    pub fn terminate(&mut self) -> Result<()> {
        self.machine.transition(InterviewEvent::Terminate)
    }

    pub fn is_terminated(&self) -> bool {
        self.machine.is_terminal()
    }
}
