//! Error types for the Keen client
//!
//! Two failure families matter to callers: configuration problems detected
//! locally before any request is sent ([`KeenError::InvalidEnvironment`],
//! [`KeenError::Config`]) and errors reported by the Keen API itself
//! ([`KeenError::Api`]). Everything else is transport or parsing noise.

use thiserror::Error;

/// Result type alias for Keen client operations
pub type Result<T> = std::result::Result<T, KeenError>;

#[derive(Error, Debug)]
pub enum KeenError {
    /// A credential required by the operation is not configured
    #[error("{0}")]
    InvalidEnvironment(String),

    /// The Keen API answered with a non-2xx status
    #[error("Error from Keen API. Details:\n Message: {message}\nCode: {error_code}")]
    Api {
        status: u16,
        error_code: String,
        message: String,
    },

    /// HTTP request failed before a response was received
    #[error("Network request failed: {0}. Check your internet connection and API URL.")]
    Http(#[from] reqwest::Error),

    /// Response or payload was not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your KEEN_* environment variables or command-line flags.")]
    Config(String),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeenError {
    pub fn invalid_environment(msg: impl Into<String>) -> Self {
        Self::InvalidEnvironment(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn api(status: u16, error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            error_code: error_code.into(),
            message: message.into(),
        }
    }

    /// True for missing-credential errors raised before any request
    pub fn is_invalid_environment(&self) -> bool {
        matches!(self, Self::InvalidEnvironment(_))
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Provider error code of an API error, e.g. `ResourceNotFoundError`
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Api { error_code, .. } => Some(error_code),
            _ => None,
        }
    }

    /// Provider message of an API error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_accessors() {
        let err = KeenError::api(404, "ResourceNotFoundError", "not found");
        assert!(err.is_api_error());
        assert!(!err.is_invalid_environment());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.error_code(), Some("ResourceNotFoundError"));
        assert_eq!(err.api_message(), Some("not found"));
        assert_eq!(
            err.to_string(),
            "Error from Keen API. Details:\n Message: not found\nCode: ResourceNotFoundError"
        );
    }

    #[test]
    fn test_invalid_environment_displays_message_verbatim() {
        let err = KeenError::invalid_environment("set a master key");
        assert!(err.is_invalid_environment());
        assert_eq!(err.error_code(), None);
        assert_eq!(err.to_string(), "set a master key");
    }
}
