//! Error types and response classification for the provisioning client.

use reqwest::StatusCode;
use thiserror::Error;


/// Classification of a non-success HTTP response into a client-facing
/// failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The server rejected the request as malformed (400).
    InvalidRequest,
    /// The request was not authorized (401).
    Unauthorized,
    /// Access to the resource is forbidden (403).
    Forbidden,
    /// The resource does not exist (404).
    NotFound,
    /// The method is not allowed on the target resource (405).
    MethodNotAllowed,
    /// The requested representation was not acceptable (406).
    NotAcceptable,
    /// The request conflicts with the current resource state (409).
    Conflict,
    /// The server failed while processing the request (500).
    ServerError,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not found"),
            Self::MethodNotAllowed => write!(f, "method not allowed"),
            Self::NotAcceptable => write!(f, "not acceptable"),
            Self::Conflict => write!(f, "conflict"),
            Self::ServerError => write!(f, "server error"),
        }
    }
}

/// Client error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration. No request reaches the wire.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The transport could not complete the exchange. Propagated
    /// unclassified; never turned into an HTTP failure kind.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a status code mapped to a [`FailureKind`].
    #[error("{kind} ({status}): {message}")]
    Http {
        /// Failure category for the status code.
        kind: FailureKind,
        /// Original HTTP status code.
        status: u16,
        /// Status-specific descriptive message.
        message: String,
    },

    /// The server answered with 501 or another unmapped status code.
    /// Fatal; callers must not retry.
    #[error("operation is not supported by the provisioning server (status {status})")]
    Unsupported {
        /// Original HTTP status code.
        status: u16,
    },
}

/// Classifies an HTTP status code into success or a typed failure.
///
/// Pure function of the status code; the response body is never inspected.
/// The mapping is total: every code outside the explicit table lands on
/// [`Error::Unsupported`].
///
/// # Errors
/// Returns the failure variant for every status other than 200.
pub fn classify_status(status: StatusCode) -> Result<(), Error> {
    let failure = |kind: FailureKind, message: &str| Error::Http {
        kind,
        status: status.as_u16(),
        message: message.to_string(),
    };

    match status.as_u16() {
        200 => Ok(()),
        400 => Err(failure(
            FailureKind::InvalidRequest,
            "bad request was rejected by the provisioning server",
        )),
        401 => Err(failure(
            FailureKind::Unauthorized,
            "request was not authorized by the provisioning server",
        )),
        403 => Err(failure(
            FailureKind::Forbidden,
            "access to the resource is forbidden",
        )),
        404 => Err(failure(
            FailureKind::NotFound,
            "resource was not found on the provisioning server",
        )),
        405 => Err(failure(
            FailureKind::MethodNotAllowed,
            status.canonical_reason().unwrap_or("method not allowed"),
        )),
        406 => Err(failure(
            FailureKind::NotAcceptable,
            "input was not acceptable",
        )),
        409 => Err(failure(
            FailureKind::Conflict,
            "conflicting resource state on the provisioning server",
        )),
        500 => Err(failure(
            FailureKind::ServerError,
            "internal server error during the operation",
        )),
        other => Err(Error::Unsupported { status: other }),
    }
}
