//! Error types for the terrain-api library.
//!
//! Any non-2xx response surfaces as [`Error::Protocol`] immediately; nothing
//! is retried.

use std::fmt;
use thiserror::Error;

/// The unified error type for Terrain operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success HTTP status, or a success body that could not be decoded.
    #[error("HTTP request failed: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A search returned no apps to select from.
    #[error("no apps matched the search '{query}'")]
    NoAppsFound { query: String },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP client error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            TransportError::Timeout { message }
        } else if err.is_connect() {
            TransportError::Connection { message }
        } else {
            TransportError::Http { message }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A failed Terrain response.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Terrain error code (e.g. `ERR_NOT_AUTHORIZED`), if the body carried one.
    pub error_code: Option<String>,
    /// Human-readable reason from the server, or a decode failure message.
    pub reason: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.error_code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref reason) = self.reason {
            write!(f, ": {}", reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error_code: Option<String>, reason: Option<String>) -> Self {
        Self {
            status,
            error_code,
            reason,
        }
    }

    /// A success status whose body did not match the expected shape.
    pub fn malformed(status: u16, reason: impl fmt::Display) -> Self {
        Self::new(
            status,
            None,
            Some(format!("malformed response body: {}", reason)),
        )
    }

    /// Check if the server rejected the credentials or token.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Unknown system ID.
    #[error("invalid system ID '{value}': expected 'de' or 'agave'")]
    SystemId { value: String },

    /// Invalid app ID.
    #[error("invalid app ID '{value}': {reason}")]
    AppId { value: String, reason: String },

    /// App description could not be read as a launchable app.
    #[error("invalid app description: {reason}")]
    AppDetail { reason: String },

    /// Parameter ID not defined by the app.
    #[error("app '{app_id}' has no parameter '{parameter}'")]
    UnknownParameter { app_id: String, parameter: String },

    /// Required parameters without a value.
    #[error("missing required parameters: {}", .parameters.join(", "))]
    MissingParameters { parameters: Vec<String> },
}
