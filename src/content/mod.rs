//! Static word lists the interview is assembled from.

mod tables;

pub use tables::*;

use crate::{Error, Result};
use std::collections::HashSet;

/// Every interview needs at least this many distinct questions to draw from.
pub const MIN_QUESTION_BANK_SIZE: usize = 100;

const PADDING_QUESTION: &str =
    "Give an unreasonably detailed answer to: why meetings breed more meetings?";

#[derive(Debug, Clone)]
pub struct ContentTables {
    adjectives: Vec<String>,
    nouns: Vec<String>,
    suffixes: Vec<String>,
    manager_first: Vec<String>,
    manager_last: Vec<String>,
    rejection_reasons: Vec<String>,
    questions: Vec<String>,
}

impl ContentTables {
    pub fn builtin() -> Self {
        Self {
            adjectives: owned(ADJECTIVES),
            nouns: owned(NOUNS),
            suffixes: owned(SUFFIXES),
            manager_first: owned(MANAGER_FIRST),
            manager_last: owned(MANAGER_LAST),
            rejection_reasons: owned(REJECTION_REASONS),
            questions: pad_question_bank(owned(BUILTIN_QUESTIONS), MIN_QUESTION_BANK_SIZE),
        }
    }

    /// Replaces the question bank, padding it up to [`MIN_QUESTION_BANK_SIZE`].
    pub fn with_questions(mut self, questions: Vec<String>) -> Result<Self> {
        self.questions = pad_question_bank(questions, MIN_QUESTION_BANK_SIZE);
        self.validate()?;
        Ok(self)
    }

    pub fn with_rejection_reasons(mut self, reasons: Vec<String>) -> Result<Self> {
        self.rejection_reasons = reasons;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("adjectives", &self.adjectives),
            ("nouns", &self.nouns),
            ("suffixes", &self.suffixes),
            ("manager_first", &self.manager_first),
            ("manager_last", &self.manager_last),
            ("rejection_reasons", &self.rejection_reasons),
            ("questions", &self.questions),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(Error::config(format!("content table '{}' is empty", name)));
            }
        }

        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !seen.insert(question.as_str()) {
                return Err(Error::config(format!(
                    "duplicate question in bank: {}",
                    question
                )));
            }
        }

        Ok(())
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn manager_first(&self) -> &[String] {
        &self.manager_first
    }

    pub fn manager_last(&self) -> &[String] {
        &self.manager_last
    }

    pub fn rejection_reasons(&self) -> &[String] {
        &self.rejection_reasons
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Default for ContentTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Appends numbered variants of a fixed filler question until `min` is reached.
pub fn pad_question_bank(mut questions: Vec<String>, min: usize) -> Vec<String> {
    let missing = min.saturating_sub(questions.len());
    questions.extend((1..=missing).map(|i| format!("{} (variant {})", PADDING_QUESTION, i)));
    questions
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
