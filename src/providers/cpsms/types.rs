//! CPSMS wire types.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Body of a `send` request (single recipient).
#[derive(Debug, Clone, Serialize)]
pub struct SingleSmsRequest<'a> {
    pub message: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

/// Body of a `sendgroup` request.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSmsRequest<'a> {
    pub message: &'a str,
    pub from: &'a str,
    pub to_group: &'a [String],
}

/// How the `username:api_key` pair is placed after `Basic ` in the
/// Authorization header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthEncoding {
    /// The pair is sent as-is, e.g. `Basic user:key`.
    #[default]
    Literal,
    /// The pair is base64 encoded as in RFC 7617, e.g. `Basic dXNlcjprZXk=`.
    Base64,
}

impl AuthEncoding {
    /// Build the full header value for the given credentials.
    pub fn header_value(&self, username: &str, api_key: &str) -> String {
        let pair = format!("{username}:{api_key}");
        match self {
            Self::Literal => format!("Basic {pair}"),
            Self::Base64 => format!("Basic {}", STANDARD.encode(pair)),
        }
    }
}

impl Display for AuthEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal => f.write_str("literal"),
            Self::Base64 => f.write_str("base64"),
        }
    }
}

/// CPSMS endpoints, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Send,
    SendGroup,
    CreditValue,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::SendGroup => "sendgroup",
            Self::CreditValue => "creditvalue",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
