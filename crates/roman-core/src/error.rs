use thiserror::Error;

/// Error raised by any numeral or measurement conversion.
///
/// A single kind carrying a human-readable message; callers that need to
/// distinguish failure causes match on the message produced at the point
/// of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConversionError {
    message: String,
}

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
