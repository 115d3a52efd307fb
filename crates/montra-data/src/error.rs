//! Errors for catalog document loading.

use thiserror::Error;

/// Failure loading a remote JSON document.
///
/// `Http` and `Connection` cover the transport; `Parse` covers a body
/// that is not valid JSON or does not match the expected shape. All
/// variants are fatal to that load attempt only: the caller keeps its
/// previous state and surfaces the failure to the user.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The server reported a non-success status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request could not be completed (DNS, connect, timeout).
    #[error("connection error: {0}")]
    Connection(String),

    /// The body is not valid JSON or is missing expected keys.
    #[error("parse error: {0}")]
    Parse(String),
}
