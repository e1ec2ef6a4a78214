//! CPSMS HTTP client.

use super::config::{CpSmsConfig, with_trailing_slash};
use super::errors::{CpSmsError, Result};
use super::types::{AuthEncoding, Endpoint, GroupSmsRequest, SingleSmsRequest};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::{Span, debug};
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// CPSMS HTTP client.
///
/// This client handles communication with the CPSMS REST API. Every call
/// issues exactly one request carrying the account's Basic credential and
/// returns the response body as text, whatever the HTTP status: CPSMS
/// reports failures inside the JSON body.
///
/// The inherent methods are raw endpoint calls. Argument validation lives in
/// the [`SmsSender`](crate::SmsSender) implementation, which is what the
/// facade uses.
///
/// # Example
///
/// ```rust,ignore
/// use sportstiming_sms::SmsSender;
/// use sportstiming_sms::cpsms::CpSmsClient;
///
/// let client = CpSmsClient::new("username", "api_key")?;
///
/// let body = client.send_sms("Hello", "Sportstiming", "4512345678").await?;
/// println!("CPSMS replied: {}", body);
///
/// let balance = client.check_balance().await?;
/// ```
#[derive(Clone)]
pub struct CpSmsClient {
    http_client: ClientWithMiddleware,
    username: String,
    api_key: SecretString,
    base_url: Url,
    auth_encoding: AuthEncoding,
}

impl std::fmt::Debug for CpSmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpSmsClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("api_key", &"[REDACTED]")
            .field("auth_encoding", &self.auth_encoding)
            .finish()
    }
}

/// Builder for configuring a [`CpSmsClient`].
pub struct CpSmsClientBuilder {
    config: CpSmsConfig,
    http_client: Option<ClientWithMiddleware>,
}

impl CpSmsClientBuilder {
    /// Create a new builder from a configuration.
    pub fn new(config: CpSmsConfig) -> Self {
        Self {
            config,
            http_client: None,
        }
    }

    /// Set a custom HTTP client with middleware.
    ///
    /// The timeouts and user agent of the configuration are not applied to a
    /// client supplied here.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`CpSmsClient`].
    pub fn build(self) -> Result<CpSmsClient> {
        let config = self.config;
        config.validate()?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(config.timeout)
                    .connect_timeout(config.connect_timeout)
                    .user_agent(config.user_agent.as_str())
                    .build()
                    .map_err(CpSmsError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(CpSmsClient {
            http_client,
            username: config.username,
            api_key: config.api_key,
            base_url: with_trailing_slash(config.base_url),
            auth_encoding: config.auth_encoding,
        })
    }
}

impl CpSmsClient {
    /// Create a new client with the default API URL and settings.
    ///
    /// # Arguments
    /// * `username` - CPSMS account username
    /// * `api_key` - CPSMS API key
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(CpSmsConfig::new(username, api_key))
    }

    /// Create a new client from a configuration.
    pub fn from_config(config: CpSmsConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder(config: CpSmsConfig) -> CpSmsClientBuilder {
        CpSmsClientBuilder::new(config)
    }

    /// Base URL the endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of an endpoint.
    pub(crate) fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        Ok(self.base_url.join(endpoint.path())?)
    }

    /// Authorization header value for this account.
    fn authorization(&self) -> Result<HeaderValue> {
        let value = self
            .auth_encoding
            .header_value(&self.username, self.api_key.expose_secret());
        let mut header = HeaderValue::from_str(&value).map_err(CpSmsError::InvalidHeader)?;
        header.set_sensitive(true);
        Ok(header)
    }

    /// Attach credentials, send the request and return the body text.
    async fn execute(&self, request: RequestBuilder) -> Result<String> {
        let response = request
            .header(AUTHORIZATION, self.authorization()?)
            .send()
            .await?;

        #[cfg(feature = "tracing")]
        {
            let status = response.status();
            Span::current().record("http.status", status.as_u16());
            if !status.is_success() {
                debug!(
                    status = %status,
                    "CPSMS returned non-success status, passing body through"
                );
            }
        }

        response.text().await.map_err(CpSmsError::ReadResponse)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, endpoint: Endpoint, body: &T) -> Result<String> {
        let url = self.endpoint_url(endpoint)?;
        self.execute(self.http_client.post(url).json(body)).await
    }

    /// POST a single-recipient message to the `send` endpoint.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "CpSmsClient::send",
            skip_all,
            fields(endpoint = %Endpoint::Send, http.status = tracing::field::Empty)
        )
    )]
    pub async fn send(&self, request: &SingleSmsRequest<'_>) -> Result<String> {
        let body = self.post_json(Endpoint::Send, request).await?;

        #[cfg(feature = "tracing")]
        Span::current().set_status(Status::Ok);

        Ok(body)
    }

    /// POST a group message to the `sendgroup` endpoint.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "CpSmsClient::send_group",
            skip_all,
            fields(
                endpoint = %Endpoint::SendGroup,
                recipients = request.to_group.len(),
                http.status = tracing::field::Empty
            )
        )
    )]
    pub async fn send_group(&self, request: &GroupSmsRequest<'_>) -> Result<String> {
        let body = self.post_json(Endpoint::SendGroup, request).await?;

        #[cfg(feature = "tracing")]
        Span::current().set_status(Status::Ok);

        Ok(body)
    }

    /// GET the `creditvalue` endpoint.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "CpSmsClient::credit_value",
            skip_all,
            fields(endpoint = %Endpoint::CreditValue, http.status = tracing::field::Empty)
        )
    )]
    pub async fn credit_value(&self) -> Result<String> {
        let url = self.endpoint_url(Endpoint::CreditValue)?;
        let body = self.execute(self.http_client.get(url)).await?;

        #[cfg(feature = "tracing")]
        Span::current().set_status(Status::Ok);

        Ok(body)
    }
}
