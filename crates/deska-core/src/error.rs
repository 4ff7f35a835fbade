//! Error types for the Deska engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::EvaluationError;

/// A shared error type for the entire Deska workspace.
///
/// Errors raised while dispatching a turn never reach the caller of
/// [`SessionController::submit`](crate::session::SessionController::submit);
/// they are converted into an apology response there. The variants below
/// are still surfaced by configuration loading and the direct calculator.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeskaError {
    /// Arithmetic expression could not be evaluated
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    /// A matched intent is missing a slot its action needs
    #[error("Missing slot '{slot}' for intent {intent}")]
    MissingSlot { intent: String, slot: String },

    /// A configured or constructed URL is not valid
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system or process spawning)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeskaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MissingSlot error
    pub fn missing_slot(intent: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::MissingSlot {
            intent: intent.into(),
            slot: slot.into(),
        }
    }

    /// Creates an InvalidUrl error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an evaluation error
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation(_))
    }

    /// Check if this is an internal error
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DeskaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DeskaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DeskaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DeskaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DeskaError>`.
pub type Result<T> = std::result::Result<T, DeskaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_error_converts() {
        let err: DeskaError = EvaluationError::DivisionByZero.into();
        assert!(err.is_evaluation());
        assert_eq!(err.to_string(), "Evaluation error: division by zero");
    }

    #[test]
    fn test_toml_error_is_serialization() {
        let err: DeskaError = toml::from_str::<toml::Table>("= broken").unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }

    #[test]
    fn test_missing_slot_message() {
        let err = DeskaError::missing_slot("Search", "query");
        assert_eq!(err.to_string(), "Missing slot 'query' for intent Search");
    }
}
