mod driver;
pub mod fsm;
mod prompt;
mod sampler;
mod session;

pub use driver::{InterviewDriver, NextStep, RoundReport, ScoringResult};
pub use fsm::{InterviewEvent, InterviewState, InterviewStateMachine};
pub use prompt::build_critique_prompt;
pub use sampler::sample_questions;
pub use session::{
    BLANK_ANSWER_PLACEHOLDER, FALLBACK_CRITIQUE, QUESTIONS_PER_INTERVIEW, RoundRecord, Session,
    normalize_answer,
};
