//! CPSMS client configuration.

use super::errors::{CpSmsError, Result};
use super::types::AuthEncoding;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;
use url::Url;

/// Default CPSMS API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.cpsms.dk/v2/";

/// Default timeout applied to the whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing the connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the CPSMS username.
pub const ENV_USERNAME: &str = "CPSMS_USERNAME";
/// Environment variable holding the CPSMS API key.
pub const ENV_API_KEY: &str = "CPSMS_API_KEY";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "CPSMS_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "CPSMS_TIMEOUT_SECS";

/// Configuration for the CPSMS client.
///
/// Holds the account credentials and the HTTP settings. The API key is kept
/// in a [`SecretString`] and never shows up in `Debug` output.
#[derive(Clone)]
pub struct CpSmsConfig {
    /// CPSMS account username.
    pub username: String,
    /// CPSMS API key.
    pub api_key: SecretString,
    /// API base URL; endpoint paths are joined onto it.
    pub base_url: Url,
    /// Timeout for the entire request.
    pub timeout: Duration,
    /// Timeout for the connect phase.
    pub connect_timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Encoding of the Basic credential.
    pub auth_encoding: AuthEncoding,
}

impl std::fmt::Debug for CpSmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpSmsConfig")
            .field("username", &self.username)
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("auth_encoding", &self.auth_encoding)
            .finish()
    }
}

impl CpSmsConfig {
    /// Create a config with default settings for the given credentials.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        CpSmsConfigBuilder::new(username, api_key).build_unchecked()
    }

    /// Create a new builder for CpSmsConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sportstiming_sms::cpsms::{AuthEncoding, CpSmsConfig};
    /// use std::time::Duration;
    ///
    /// let config = CpSmsConfig::builder("user", "key")
    ///     .timeout(Duration::from_secs(5))
    ///     .auth_encoding(AuthEncoding::Base64)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.timeout, Duration::from_secs(5));
    /// assert_eq!(config.base_url.as_str(), "https://api.cpsms.dk/v2/");
    /// ```
    pub fn builder(username: impl Into<String>, api_key: impl Into<String>) -> CpSmsConfigBuilder {
        CpSmsConfigBuilder::new(username, api_key)
    }

    /// Load the config from `CPSMS_USERNAME`, `CPSMS_API_KEY` and the optional
    /// `CPSMS_BASE_URL` and `CPSMS_TIMEOUT_SECS` variables.
    pub fn from_env() -> Result<Self> {
        let username = require_env(ENV_USERNAME)?;
        let api_key = require_env(ENV_API_KEY)?;

        let mut builder = CpSmsConfigBuilder::new(username, api_key);

        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            builder = builder.base_url(Url::parse(&base_url)?);
        }

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| CpSmsError::InvalidArgument {
                    field: ENV_TIMEOUT_SECS,
                    reason: e.to_string(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration.
    ///
    /// Rejects empty credentials, zero timeouts and base URLs that cannot
    /// have paths joined onto them.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(CpSmsError::empty("username"));
        }
        if self.api_key.expose_secret().is_empty() {
            return Err(CpSmsError::empty("api_key"));
        }
        if self.timeout.is_zero() {
            return Err(CpSmsError::InvalidArgument {
                field: "timeout",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.connect_timeout.is_zero() {
            return Err(CpSmsError::InvalidArgument {
                field: "connect_timeout",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.base_url.cannot_be_a_base() {
            return Err(CpSmsError::InvalidEndpoint(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(())
    }
}

fn require_env(name: &'static str) -> Result<String> {
    env::var(name).map_err(|e| CpSmsError::InvalidArgument {
        field: name,
        reason: e.to_string(),
    })
}

/// Builder for CpSmsConfig.
///
/// Provides a fluent API for configuring the client.
#[derive(Clone)]
pub struct CpSmsConfigBuilder {
    username: String,
    api_key: String,
    base_url: Option<Url>,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
    auth_encoding: AuthEncoding,
}

impl CpSmsConfigBuilder {
    /// Create a new builder with default values.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: None,
            auth_encoding: AuthEncoding::default(),
        }
    }

    /// Set a custom API base URL.
    ///
    /// A trailing slash is appended when missing so endpoint paths are joined
    /// under it rather than replacing its last segment.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the timeout for the entire request.
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Choose how the Basic credential is encoded.
    ///
    /// Default: [`AuthEncoding::Literal`]
    pub fn auth_encoding(mut self, encoding: AuthEncoding) -> Self {
        self.auth_encoding = encoding;
        self
    }

    /// Build and validate the CpSmsConfig.
    pub fn build(self) -> Result<CpSmsConfig> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    fn build_unchecked(self) -> CpSmsConfig {
        let base_url = match self.base_url {
            Some(url) => with_trailing_slash(url),
            None => default_base_url(),
        };

        CpSmsConfig {
            username: self.username,
            api_key: SecretString::from(self.api_key),
            base_url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            auth_encoding: self.auth_encoding,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("Invalid default URL")
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Append a trailing slash so [`Url::join`] resolves under the last segment.
pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.cannot_be_a_base() && !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
