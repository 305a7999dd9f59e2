//! Error types for the email classifier.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while turning a request payload into a classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// Payload was absent, empty, or had no `subject` key.
    #[error("Missing required fields (subject)")]
    MissingSubject,

    /// A field was present but not a string.
    #[error("Field '{field}' must be a string")]
    InvalidField { field: String },
}

impl ClassifyError {
    /// Whether this is a caller validation failure rather than an unexpected one.
    ///
    /// The HTTP layer answers validation failures with 200 and everything
    /// else with 500.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingSubject)
    }
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
