//! # Common Error Types
//!
//! Consolidated error handling for the bakery client.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced an HTTP response (DNS, refused, timeout)
//! - **Api**: the backend answered with a non-success status and (usually) a message
//! - **Unauthorized**: 401/403 answers, or a login response without a session
//! - **Decode**: the backend answered 2xx with a body we could not parse
//! - **Validation**: form input rejected before any request is made
//! - **State**: client-side preconditions (no logged-in user, empty cart, ...)
//! - **Config**: invalid environment configuration
//!
//! Facades show [`AppError::user_message`] in toasts, so `Api` errors surface the
//! server's own wording.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Text suitable for a toast or an inline form error.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } => message.clone(),
            AppError::Unauthorized(message)
            | AppError::Validation(message)
            | AppError::State(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Server-provided message, if the error came from the backend.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } | AppError::Unauthorized(message) => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if err.is_timeout() {
            AppError::Network(format!("request timed out: {}", err))
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_uses_server_text() {
        let err = AppError::Api {
            status: 409,
            message: "Category already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Category already exists");
        assert_eq!(err.server_message(), Some("Category already exists"));
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "API error (409): Category already exists");
    }

    #[test]
    fn test_network_errors_have_no_server_message() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message(), "Network error: connection refused");
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
