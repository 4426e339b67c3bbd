//! Error types for the CouchDB client core.
//!
//! # Design
//! A failed response is classified once, from its status code, into a
//! `BadResponse` variant. The variant is the category: callers match on it
//! to decide whether a failure was their fault (4xx) or the server's (5xx).
//! Codes outside both ranges land in `Transport`. Nothing here retries.

use serde::Deserialize;
use thiserror::Error;

/// Which side of the exchange caused a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 400–499.
    ClientError,
    /// 500–599.
    ServerError,
    /// Any other code the caller did not expect.
    Transport,
}

impl ErrorCategory {
    /// Classify a numeric status code.
    pub fn of(status: u16) -> Self {
        match status {
            400..=499 => ErrorCategory::ClientError,
            500..=599 => ErrorCategory::ServerError,
            _ => ErrorCategory::Transport,
        }
    }
}

/// A response whose status the client did not expect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadResponse {
    #[error("client error {status}: {body}")]
    ClientError { status: u16, body: String },

    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("unexpected status {status}: {body}")]
    Transport { status: u16, body: String },
}

/// A category-specific constructor was handed a code outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("status {status} is not a {expected:?}")]
pub struct InvalidStatus {
    pub status: u16,
    pub expected: ErrorCategory,
}

/// CouchDB's JSON error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CouchErrorBody {
    pub error: String,
    #[serde(default)]
    pub reason: String,
}

impl BadResponse {
    /// Build the variant matching `status`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match ErrorCategory::of(status) {
            ErrorCategory::ClientError => BadResponse::ClientError { status, body },
            ErrorCategory::ServerError => BadResponse::ServerError { status, body },
            ErrorCategory::Transport => BadResponse::Transport { status, body },
        }
    }

    pub fn client_error(status: u16, body: impl Into<String>) -> std::result::Result<Self, InvalidStatus> {
        Self::checked(status, body, ErrorCategory::ClientError)
    }

    pub fn server_error(status: u16, body: impl Into<String>) -> std::result::Result<Self, InvalidStatus> {
        Self::checked(status, body, ErrorCategory::ServerError)
    }

    fn checked(
        status: u16,
        body: impl Into<String>,
        expected: ErrorCategory,
    ) -> std::result::Result<Self, InvalidStatus> {
        if ErrorCategory::of(status) != expected {
            return Err(InvalidStatus { status, expected });
        }
        Ok(Self::new(status, body))
    }

    pub fn status(&self) -> u16 {
        match self {
            BadResponse::ClientError { status, .. }
            | BadResponse::ServerError { status, .. }
            | BadResponse::Transport { status, .. } => *status,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            BadResponse::ClientError { body, .. }
            | BadResponse::ServerError { body, .. }
            | BadResponse::Transport { body, .. } => body,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BadResponse::ClientError { .. } => ErrorCategory::ClientError,
            BadResponse::ServerError { .. } => ErrorCategory::ServerError,
            BadResponse::Transport { .. } => ErrorCategory::Transport,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, BadResponse::ClientError { .. })
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, BadResponse::ServerError { .. })
    }

    /// Decode the body as CouchDB's `{"error", "reason"}` envelope, if it is one.
    pub fn couch_error(&self) -> Option<CouchErrorBody> {
        serde_json::from_str(self.body()).ok()
    }
}

/// Which of the four accessor conventions an operation used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Get,
    Set,
    Isset,
    Unset,
}

impl AccessMode {
    /// Method-name prefix for this mode.
    pub fn prefix(self) -> &'static str {
        match self {
            AccessMode::Get => "get",
            AccessMode::Set => "set",
            AccessMode::Isset => "isset",
            AccessMode::Unset => "unset",
        }
    }
}

/// No accessor method is registered for a property in the requested mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {mode:?} property `{property}`: no method `{method}`")]
pub struct MissingAccessor {
    pub mode: AccessMode,
    pub property: String,
    pub method: String,
}

/// Errors returned by the client core.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    BadResponse(#[from] BadResponse),

    #[error(transparent)]
    MissingAccessor(#[from] MissingAccessor),

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
