use super::config::ConfigError;
use super::specification::SpecificationError;
use thiserror::Error;

/// Fatal failures of a whole analysis pass.
///
/// Per-term numeric problems (degenerate geometry) are deliberately absent:
/// they are isolated as undefined values in the output, never raised here.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid term specification: {0}")]
    Specification(#[from] SpecificationError),
}
