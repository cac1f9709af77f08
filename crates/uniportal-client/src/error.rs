//! Client error types.

use thiserror::Error;

/// Text shown whenever the backend could not be reached at all.
pub const CONNECT_FAILED: &str = "Failed to connect to server";

#[derive(Debug, Error)]
pub enum ClientError {
    /// No response: connection refused, timeout, DNS, TLS.
    #[error("{CONNECT_FAILED}")]
    Http(#[from] reqwest::Error),

    /// Non-success status. `message` is the body's `message` when present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body reports `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Body could not be decoded into the expected shape.
    #[error("unexpected response from {path}: {reason}")]
    Parse { path: String, reason: String },

    /// The client could not be built.
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl ClientError {
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
