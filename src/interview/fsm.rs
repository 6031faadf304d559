use crate::{Error, Result};
use tracing::{debug, info, warn};

// Interview states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewState {
    Welcome,
    AwaitingAnswer(usize),
    Scoring(usize),
    Decision,
    Terminated,
}

// Interview events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewEvent {
    Begin,
    AnswerSubmitted,
    CritiqueDelivered,
    Restart,
    Terminate,
}

pub struct InterviewStateMachine {
    state: InterviewState,
    total_rounds: usize,
}

impl InterviewStateMachine {
    pub fn new(total_rounds: usize) -> Self {
        Self {
            state: InterviewState::Welcome,
            total_rounds: total_rounds.max(1),
        }
    }

    pub fn current_state(&self) -> InterviewState {
        self.state
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// Where `event` would lead from the current state, without moving.
    pub fn next_state(&self, event: InterviewEvent) -> Result<InterviewState> {
        let next = match (self.state, event) {
            (InterviewState::Welcome, InterviewEvent::Begin) => InterviewState::AwaitingAnswer(0),
            (InterviewState::AwaitingAnswer(i), InterviewEvent::AnswerSubmitted) => {
                InterviewState::Scoring(i)
            }
            (InterviewState::Scoring(i), InterviewEvent::CritiqueDelivered) => {
                if i + 1 < self.total_rounds {
                    InterviewState::AwaitingAnswer(i + 1)
                } else {
                    InterviewState::Decision
                }
            }
            (InterviewState::Decision, InterviewEvent::Restart) => InterviewState::Welcome,
            (state, InterviewEvent::Terminate) if state != InterviewState::Terminated => {
                InterviewState::Terminated
            }
            _ => {
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };
        Ok(next)
    }

    pub fn transition(&mut self, event: InterviewEvent) -> Result<()> {
        let old_state = self.state;
        debug!("Interview FSM processing event {:?} in state {:?}", event, old_state);

        let new_state = match self.next_state(event) {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "Invalid interview transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(e);
            }
        };

        info!(
            "Interview state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.state == InterviewState::Terminated
    }

    pub fn accepts_answers(&self) -> bool {
        matches!(self.state, InterviewState::AwaitingAnswer(_))
    }
}

impl Default for InterviewStateMachine {
    fn default() -> Self {
        Self::new(super::QUESTIONS_PER_INTERVIEW)
    }
}
