use mt_core::MtError;
use mt_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("the road network has no nodes")]
    EmptyNetwork,

    #[error("the detail schedule has no movements")]
    NoMovements,

    #[error("waypoint {0:?} is not assigned")]
    UnassignedWaypoint(String),

    #[error("route has no nodes")]
    EmptyRoute,

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),

    #[error(transparent)]
    Core(#[from] MtError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
