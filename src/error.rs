//! Error types for Smartsheet operations
//!
//! Errors are split by where they originate: resolving column titles against the
//! cached column directory, talking to the remote service, and decoding what it sent
//! back. Nothing is retried automatically; every failure is returned to the caller.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::BatchResult;

/// Errors raised by the HTTP transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not reach the service
    #[error("Failed to connect to Smartsheet: {0}")]
    Connection(String),

    /// The call exceeded the configured deadline
    #[error("Smartsheet request timed out after {0} seconds")]
    Timeout(u64),

    /// The service answered with a non-success status
    #[error("Smartsheet API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    /// The request could not be built or sent
    #[error("Invalid request: {0}")]
    Request(String),

    /// The response body could not be read or copied to its destination
    #[error("Failed to transfer response body: {0}")]
    Body(String),
}

impl TransportError {
    /// HTTP status code, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that can occur while using the SDK
#[derive(Error, Debug)]
pub enum SmartsheetError {
    /// A column title is not present in the cached column directory
    #[error("Invalid column name: {0}")]
    UnknownColumn(String),

    /// A queued cell breaks the outgoing cell rules
    #[error("Invalid cell for column '{column}': {reason}")]
    InvalidCell { column: String, reason: String },

    /// Caller supplied an argument the API cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network failure or non-success status
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response body did not match the expected shape
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be encoded
    #[error("Failed to encode {context} request: {source}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service accepted the call but reported a failure result code
    #[error("Smartsheet returned result code {code}: {message}")]
    Api { code: i64, message: String },

    /// Rows were created but linking children to their parents failed part way
    #[error("Rows were created but setting parent rows failed")]
    ParentLinkFailed {
        result: Box<BatchResult>,
        #[source]
        source: Box<SmartsheetError>,
    },

    /// Snapshot file could not be written or read back
    #[error("Snapshot error with {path}: {message}")]
    Snapshot { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for SDK operations
pub type SmartsheetResult<T> = Result<T, SmartsheetError>;

impl SmartsheetError {
    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        SmartsheetError::Decode {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn encode(context: impl Into<String>, source: serde_json::Error) -> Self {
        SmartsheetError::Encode {
            context: context.into(),
            source,
        }
    }

    /// True for errors raised before any request was sent
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            SmartsheetError::UnknownColumn(_)
                | SmartsheetError::InvalidCell { .. }
                | SmartsheetError::InvalidArgument(_)
        )
    }

    /// Rows already created by an insert whose parent linking failed
    pub fn created_rows(&self) -> Option<&BatchResult> {
        match self {
            SmartsheetError::ParentLinkFailed { result, .. } => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SmartsheetError::UnknownColumn("Status".to_string());
        assert_eq!(err.to_string(), "Invalid column name: Status");

        let err = SmartsheetError::Transport(TransportError::Timeout(120));
        assert_eq!(
            err.to_string(),
            "Smartsheet request timed out after 120 seconds"
        );

        let err = SmartsheetError::Api {
            code: 1006,
            message: "Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Smartsheet returned result code 1006: Not Found"
        );
    }

    #[test]
    fn test_transport_status() {
        let err = TransportError::Status {
            status: 404,
            body: "{}".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(TransportError::Timeout(5).status(), None);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: SmartsheetError = io_err.into();
        assert!(matches!(err, SmartsheetError::Io(_)));
    }

    #[test]
    fn test_is_resolution() {
        assert!(SmartsheetError::UnknownColumn("x".to_string()).is_resolution());
        assert!(!SmartsheetError::Transport(TransportError::Timeout(1)).is_resolution());
    }
}
