//! Core types for SMS gateway operations.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

// =============================================================================
// SendResult
// =============================================================================

/// Raw response body returned by the gateway for a send operation.
///
/// The body is vendor-defined JSON and is passed through untouched. Vendor
/// failures (insufficient credit, invalid recipient, ...) are encoded inside
/// this body and are not interpreted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult(String);

impl SendResult {
    /// Create a new SendResult from a response body.
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    /// Get the body as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the result and return the body.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SendResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SendResult {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SendResult {
    fn from(body: String) -> Self {
        Self(body)
    }
}

impl From<&str> for SendResult {
    fn from(body: &str) -> Self {
        Self(body.to_string())
    }
}

// =============================================================================
// Credit
// =============================================================================

/// Remaining account credit as reported by the gateway.
///
/// CPSMS formats the value for its locale (e.g. `"9.843,40"`), so it is kept
/// as text and never converted to a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credit(String);

impl Credit {
    /// Create a new Credit.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the credit as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the credit and return the text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Credit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Credit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Credit {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credit {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
