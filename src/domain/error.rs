/// Configuration rejected by [`PileConfig::validate`](super::config::PileConfig::validate)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: planeBaseTarget must name at least one plane")]
    NoPlanes,

    #[error("Invalid configuration: at most {max} planes are supported, got {actual}")]
    TooManyPlanes { max: usize, actual: usize },

    #[error("Invalid configuration: {field} has {actual} entries, expected {expected}")]
    PlaneArrayLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {field} must be positive")]
    NonPositive { field: &'static str },

    #[error("Invalid configuration: radiusVar must not be negative")]
    NegativeRadiusVar,

    #[error("Invalid configuration: {field} must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
