use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoiError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    Row { line: u64, reason: String },

    #[error("invalid POI configuration: {0}")]
    Config(String),

    #[error("no points of interest found in the original trace")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PoiResult<T> = Result<T, PoiError>;
