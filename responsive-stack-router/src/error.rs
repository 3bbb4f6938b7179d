//! Error types for navigation rehydration
//!
//! The structural rewriters never fail: malformed input means "no
//! adjustment made", not an error. Errors exist only at the delegation
//! boundary, where a router implementation rejects configurations it cannot
//! rehydrate against. When serialized, codes are converted to
//! SCREAMING_SNAKE_CASE strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Type-safe error codes for router operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavErrorCode {
    /// The routing configuration cannot produce a usable state
    InvalidConfiguration,
    /// A route name is not part of the configured route table
    UnknownRoute,
    /// JSON serialization/deserialization failed
    SerializationError,
}

impl NavErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration => "INVALID_CONFIGURATION",
            Self::UnknownRoute => "UNKNOWN_ROUTE",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for NavErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Router error with type-safe code and message.
///
/// # Example
/// ```rust,ignore
/// let error = NavError::invalid_configuration("route table is empty")
///     .with_details(serde_json::json!({"routeNames": []}));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("[{code}] {message}")]
pub struct NavError {
    /// Type-safe error code
    pub code: NavErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (JSON value)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl NavError {
    /// Create a new error with code and message.
    pub fn new(code: NavErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    /// Create an INVALID_CONFIGURATION error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::new(NavErrorCode::InvalidConfiguration, message)
    }

    /// Create an UNKNOWN_ROUTE error.
    pub fn unknown_route(name: &str) -> Self {
        Self::new(
            NavErrorCode::UnknownRoute,
            format!("Route '{}' is not in the route table", name),
        )
    }

    /// Create a SERIALIZATION_ERROR error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(NavErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Result type alias for router operations.
pub type NavResult<T> = Result<T, NavError>;
