use mt_core::PersonCategory;
use mt_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A `nearest_to` reference names a waypoint that is undeclared, placed
    /// later in a cycle, or left unset.
    #[error("waypoint {reference:?} must be assigned before {waypoint:?}")]
    DependencyOrder { waypoint: String, reference: String },

    #[error("no bounding box available for random placement")]
    NoBoundingBox,

    #[error("speed must be finite and > 0, got {0}")]
    InvalidSpeed(f64),

    #[error("no profile for person category {0}")]
    NoProfile(PersonCategory),

    #[error("invalid person record: {0}")]
    Format(String),

    #[error(transparent)]
    Mobility(#[from] MobilityError),
}

pub type AgentResult<T> = Result<T, AgentError>;
