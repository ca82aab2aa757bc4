use thiserror::Error;

use crate::client::AgentError;

/// Custom error types for qassist
#[derive(Debug, Error)]
pub enum QassistError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
