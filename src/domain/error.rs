use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Network failure, timeout or non-success status from the completion service.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service flagged its output as truncated and produced no usable text.
    #[error("Incomplete output: {0}")]
    IncompleteOutput(String),

    /// Structured output was present but did not match the travel plan shape.
    #[error("Malformed output: {0}")]
    MalformedOutput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn incomplete_output(msg: impl Into<String>) -> Self {
        Self::IncompleteOutput(msg.into())
    }

    pub fn malformed_output(msg: impl Into<String>) -> Self {
        Self::MalformedOutput(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_incomplete_output(&self) -> bool {
        matches!(self, Self::IncompleteOutput(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
