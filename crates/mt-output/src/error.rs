//! Error types for mt-output.

use mt_agent::AgentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid sample window: {0}")]
    InvalidWindow(String),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type OutputResult<T> = Result<T, OutputError>;
