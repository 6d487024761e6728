//! Unified SDK error types.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Non-2xx responses are decoded once, here, from the backend's JSON envelope
/// (`{"message": ..., "errors": {...}}`) — call sites never re-parse bodies.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Network unreachable, connect failure, or any other reqwest-level error.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// 401 — no session or an invalid one. Never auto-handled at this layer;
    /// the session store owns the transition out of the authenticated state.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 419 — session or CSRF token expired.
    #[error("Session expired")]
    SessionExpired,

    #[error("Not found: {0}")]
    NotFound(String),

    /// 422-class response with per-field messages, surfaced verbatim so the
    /// form layer can render them inline.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        errors: HashMap<String, Vec<String>>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },

    /// A failure propagated out of a de-duplicated cache fetch. The original
    /// error is shared between every caller that joined the fetch.
    #[error("{0}")]
    Shared(Arc<HttpError>),
}

impl HttpError {
    /// Whether this is a transport-level failure rather than a decoded
    /// HTTP response.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout => true,
            Self::Shared(inner) => inner.is_transport(),
            _ => false,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),
}
