//! Error classification shared by senders and the facade.

use std::fmt::{self, Display, Formatter};

/// Broad class of a failure, independent of which layer raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was empty or missing. Raised before any network I/O.
    InvalidArgument,
    /// The HTTP call could not complete (connect, DNS, TLS, timeout, body read).
    Transport,
    /// A response could not be interpreted (invalid JSON, missing field).
    Parse,
    /// The client could not be set up (bad endpoint, HTTP client, runtime).
    Configuration,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Transport => "transport",
            Self::Parse => "parse",
            Self::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

/// Trait for errors that can report which [`ErrorKind`] they belong to.
///
/// Every sender error implements this so the facade can keep the class of
/// a failure after boxing the concrete error.
///
/// # Examples
///
/// ```rust
/// use sportstiming_sms::{ClassifiedError, ErrorKind};
///
/// enum MyError {
///     EmptyRecipient,
///     Timeout,
/// }
///
/// impl ClassifiedError for MyError {
///     fn kind(&self) -> ErrorKind {
///         match self {
///             MyError::EmptyRecipient => ErrorKind::InvalidArgument,
///             MyError::Timeout => ErrorKind::Transport,
///         }
///     }
/// }
///
/// assert!(MyError::Timeout.is_transport());
/// ```
pub trait ClassifiedError {
    /// Returns the class of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns true if the error was raised by local validation.
    fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns true if the underlying HTTP call failed.
    fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Returns true if a response body could not be interpreted.
    fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }
}
