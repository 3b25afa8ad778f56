use thiserror::Error;

/// Rejected stat declarations. A stat that fails to parse is skipped and keeps
/// whatever text the page rendered for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("stat node has no data-target attribute")]
    MissingTarget,
    #[error("data-target {0:?} is not a non-negative integer")]
    InvalidTarget(String),
    #[error("data-unit {0:?} is neither \"%\" nor \"+\"")]
    UnknownUnit(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("visibility threshold {0} is outside (0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("counter step count must be at least 1")]
    ZeroSteps,
    #[error("{0} interval must be at least 1ms")]
    ZeroInterval(&'static str),
}
