//! Error types for the CPSMS gateway.

use crate::errors::{ClassifiedError, ErrorKind};
use thiserror::Error;

/// Main error type for CPSMS client operations.
#[derive(Debug, Error)]
pub enum CpSmsError {
    /// A required argument was empty. No request was sent.
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument as it appears on the wire.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The configured base URL or an endpoint joined onto it is not valid.
    #[error("Invalid CPSMS endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The credentials cannot be carried in an HTTP header.
    #[error("Credentials contain characters not allowed in an Authorization header")]
    InvalidHeader(#[source] reqwest::header::InvalidHeaderValue),

    /// Failed to send HTTP request.
    #[error("Failed to send HTTP request: {0}")]
    HttpRequest(#[from] reqwest_middleware::Error),

    /// Failed to read the response body.
    #[error("Failed to read response: {0}")]
    ReadResponse(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CpSmsError>;

impl CpSmsError {
    pub(crate) fn empty(field: &'static str) -> Self {
        Self::InvalidArgument {
            field,
            reason: "must not be empty".to_string(),
        }
    }
}

impl ClassifiedError for CpSmsError {
    fn kind(&self) -> ErrorKind {
        match self {
            CpSmsError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CpSmsError::HttpRequest(_) | CpSmsError::ReadResponse(_) => ErrorKind::Transport,
            CpSmsError::BuildHttpClient(_)
            | CpSmsError::InvalidEndpoint(_)
            | CpSmsError::InvalidHeader(_) => ErrorKind::Configuration,
        }
    }
}
