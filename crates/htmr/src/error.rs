//! Error types.

/// Errors that can occur when converting HTML or loading options.
#[derive(Debug, thiserror::Error)]
pub enum HtmrError {
    #[error("Expected HTML string: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid attribute pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
