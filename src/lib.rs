pub mod config;
pub mod content;
pub mod error;
pub mod identity;
pub mod interview;
pub mod llm;
pub mod shell;

pub use error::{Error, Result};
