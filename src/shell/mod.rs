//! Presentation adapters. They render what the driver produces and feed it
//! user input; none of them hold interview state of their own.

mod terminal;

pub use terminal::{ConsoleRenderer, ConsoleShell};

use crate::config::InferenceConfig;
use crate::interview::{RoundRecord, Session};
use std::io;

pub trait Renderer {
    fn banner(&mut self, config: &InferenceConfig) -> io::Result<()>;

    fn welcome(&mut self, session: &Session) -> io::Result<()>;

    fn question(&mut self, number: usize, question: &str) -> io::Result<()>;

    fn answer_prompt(&mut self) -> io::Result<()>;

    fn critique(&mut self, manager: &str, record: &RoundRecord) -> io::Result<()>;

    fn decision(&mut self, reason: &str) -> io::Result<()>;

    fn restart_prompt(&mut self) -> io::Result<()>;

    /// Free-form status line (session ended, goodbye, ...).
    fn notice(&mut self, text: &str) -> io::Result<()>;
}
