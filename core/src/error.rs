//! Error types for the mem.ai client.
//!
//! # Design
//! A non-200 answer from the service is *not* an error here: it is recorded
//! as a rejected `MemResult` so callers can inspect the status and message.
//! `MemError` covers the faults that prevent a result from being produced at
//! all. `Rejected` only appears when a caller opts in through
//! `MemResult::into_result`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MemError>;

/// Errors returned by `MemApi` and `MemClient`.
#[derive(Debug, Error)]
pub enum MemError {
    /// The HTTP exchange could not complete (DNS, connect, reset, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not JSON or lacked the expected fields.
    #[error("malformed response (HTTP {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Missing or invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The service answered with a non-200 status.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}
