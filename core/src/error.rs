use serde::Serialize;
use thiserror::Error;

/// Unified error type for the enhancer.
///
/// The four variants are the only failure kinds the pipeline reports. Every
/// component returns this type so the binary can print a stable kind name.
#[derive(Error, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Configuration { message: String },

    #[error("{message}")]
    RemoteCall { message: String },
}

impl AppError {
    /// Create a Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a Remote Call error
    pub fn remote_call(message: impl Into<String>) -> Self {
        Self::RemoteCall {
            message: message.into(),
        }
    }

    /// Stable name of the error kind, used in `[ERROR] <kind>: <message>` output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFoundError",
            Self::Validation { .. } => "ValidationError",
            Self::Configuration { .. } => "ConfigurationError",
            Self::RemoteCall { .. } => "RemoteCallError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AppError::validation("Input text is empty.");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Validation\""));
        assert!(json.contains("\"message\":\"Input text is empty.\""));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(AppError::not_found("x").kind_name(), "NotFoundError");
        assert_eq!(AppError::validation("x").kind_name(), "ValidationError");
        assert_eq!(
            AppError::configuration("x").kind_name(),
            "ConfigurationError"
        );
        assert_eq!(AppError::remote_call("x").kind_name(), "RemoteCallError");
    }

    #[test]
    fn test_display_is_message_only() {
        let err = AppError::not_found("Input file not found: missing.txt");
        assert_eq!(err.to_string(), "Input file not found: missing.txt");
    }
}
