//! Crate-wide error taxonomy. Rider and route problems surface eagerly at
//! construction; `Simulation` marks an invariant broken mid-trial and aborts
//! the whole aggregate run rather than biasing statistics by dropping trials.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid rider `{name}`: {reason}")]
    InvalidRider { name: String, reason: String },

    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("simulation invariant violated: {0}")]
    Simulation(String),

    #[error("invalid scenario: {0}")]
    Scenario(String),

    #[error("scenario io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("scenario json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported scenario format `{0}` (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}
