//! # Error Types
//!
//! Structured error types for signal_core. Every failure a submission can hit
//! (bad selection, transport failure, HTTP error status, malformed body) gets
//! its own variant, and all of them collapse into a single user-facing message
//! via [`SubmitError::user_message`] so the presenter never branches on origin.
//!
//! ## Example
//!
//! ```rust
//! use signal_core::errors::{SubmitError, SubmitResult};
//!
//! fn check_count(actual: usize) -> SubmitResult<()> {
//!     if actual != 4 {
//!         return Err(SubmitError::InvalidSelection { actual });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias for signal_core operations
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Fallback shown when the server rejects a request without a usable message
pub const GENERIC_SERVER_ERROR: &str = "Server error occurred";

/// Fallback shown when a transport failure carries no message of its own
pub const GENERIC_TRANSPORT_ERROR: &str = "An error occurred while processing the images";

/// Structured error type for the submission workflow.
///
/// Variants map one-to-one onto the failure taxonomy: local validation,
/// status-coded server rejection, transport failure, and a 2xx body that does
/// not match the expected shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The selection does not contain exactly four images
    #[error("Please select exactly 4 images")]
    InvalidSelection { actual: usize },

    /// The server answered with a non-success status, optionally carrying
    /// a structured `{"error": ...}` body
    #[error("{}", message.as_deref().unwrap_or(GENERIC_SERVER_ERROR))]
    Http { status: u16, message: Option<String> },

    /// Network unreachable, connection reset, timeout, or any other
    /// transport-level failure
    #[error("{reason}")]
    Network { reason: String },

    /// A success response whose body could not be interpreted
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Local file I/O error while loading the selection
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl SubmitError {
    /// Create an Http error
    pub fn http(status: u16, message: Option<String>) -> Self {
        // An empty server message is as useless as none at all
        let message = message.filter(|m| !m.is_empty());
        SubmitError::Http { status, message }
    }

    /// Create a Network error
    pub fn network(reason: impl Into<String>) -> Self {
        SubmitError::Network {
            reason: reason.into(),
        }
    }

    /// Create a MalformedResponse error
    pub fn malformed(reason: impl Into<String>) -> Self {
        SubmitError::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SubmitError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The single user-visible message for this error.
    ///
    /// Server-supplied and transport messages pass through verbatim; a
    /// message-less failure falls back to a generic string rather than
    /// showing the user nothing.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Network { reason } if reason.is_empty() => {
                GENERIC_TRANSPORT_ERROR.to_string()
            }
            other => other.to_string(),
        }
    }
}
