//! Service-level error types.

use crate::errors::{ClassifiedError, ErrorKind};
use std::error::Error as StdError;
use thiserror::Error;

/// Facade errors that wrap sender errors.
#[derive(Debug, Error)]
pub enum SmsServiceError {
    /// Error from the underlying sender.
    #[error("SMS sender error: {source}")]
    Sender {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        /// Class of the sender error.
        kind: ErrorKind,
    },

    /// The credit response could not be interpreted.
    #[error("Invalid credit response: {reason}")]
    InvalidCreditResponse {
        /// Why parsing failed.
        reason: String,
        /// The raw response body.
        body: String,
    },

    /// The runtime or worker thread backing the blocking calls could not start.
    #[cfg(feature = "blocking")]
    #[error("Failed to start blocking worker: {0}")]
    BlockingRuntime(#[source] std::io::Error),

    /// The worker thread running a blocking call panicked.
    #[cfg(feature = "blocking")]
    #[error("Blocking worker thread panicked")]
    WorkerPanicked,
}

impl SmsServiceError {
    /// Box a sender error, keeping its class.
    pub(crate) fn sender<E>(error: E) -> Self
    where
        E: StdError + ClassifiedError + Send + Sync + 'static,
    {
        let kind = error.kind();
        SmsServiceError::Sender {
            source: Box::new(error),
            kind,
        }
    }
}

impl ClassifiedError for SmsServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            SmsServiceError::Sender { kind, .. } => *kind,
            SmsServiceError::InvalidCreditResponse { .. } => ErrorKind::Parse,
            #[cfg(feature = "blocking")]
            SmsServiceError::BlockingRuntime(_) | SmsServiceError::WorkerPanicked => {
                ErrorKind::Configuration
            }
        }
    }
}
