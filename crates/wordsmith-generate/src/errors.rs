use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "maximum number of words for concatenation is {limit}, the wordlist has {tokens}; \
         raise concat_threshold in the configuration file to allow more"
    )]
    ThresholdExceeded { tokens: usize, limit: usize },
    #[error("file {} does not exist", .0.display())]
    MissingSource(PathBuf),
    #[error(transparent)]
    Core(#[from] wordsmith_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
