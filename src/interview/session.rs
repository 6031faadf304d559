use crate::llm::GenerationError;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub const QUESTIONS_PER_INTERVIEW: usize = 10;

/// Stands in for an answer that is empty or only whitespace.
pub const BLANK_ANSWER_PLACEHOLDER: &str = "[Candidate stares into middle distance]";

/// Shown whenever the inference server fails or says nothing.
pub const FALLBACK_CRITIQUE: &str = "I’ve seen stronger convictions in a lukewarm decaf. Next.";

pub fn normalize_answer(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        BLANK_ANSWER_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// One finished question/answer/critique cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub question: String,
    pub answer: String,
    pub critique: String,
    /// Diagnostic from a failed inference call; `critique` holds the fallback then.
    pub failure: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl RoundRecord {
    pub fn from_outcome(
        question: String,
        answer: String,
        outcome: Result<String, GenerationError>,
    ) -> Self {
        let (critique, failure) = match outcome {
            Ok(text) if !text.trim().is_empty() => (text, None),
            Ok(_) => (FALLBACK_CRITIQUE.to_string(), None),
            Err(e) => (FALLBACK_CRITIQUE.to_string(), Some(e.to_string())),
        };

        Self {
            question,
            answer,
            critique,
            failure,
            completed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    company: String,
    manager: String,
    questions: Vec<String>,
    rounds: Vec<RoundRecord>,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(company: String, manager: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            company,
            manager,
            questions: Vec::new(),
            rounds: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn manager(&self) -> &str {
        &self.manager
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time from the start of the session to its latest finished round.
    pub fn elapsed(&self) -> Option<Duration> {
        self.rounds
            .last()
            .map(|round| round.completed_at - self.started_at)
    }

    /// Index of the question currently being asked; equals completed rounds.
    pub fn current_index(&self) -> usize {
        self.rounds.len()
    }

    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.rounds.len()).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.rounds.len() == self.questions.len()
    }

    pub(crate) fn set_questions(&mut self, questions: Vec<String>) {
        self.questions = questions;
        self.rounds.clear();
    }

    pub(crate) fn record(&mut self, round: RoundRecord) {
        self.rounds.push(round);
    }
}
