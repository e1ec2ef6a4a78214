//! Main facade implementation.

use super::credit::parse_credit;
use super::error::SmsServiceError;
use crate::providers::cpsms::{CpSmsClient, CpSmsConfig};
use crate::providers::traits::SmsSender;
use crate::types::{Credit, SendResult};

#[cfg(feature = "blocking")]
use super::blocking::BlockingRuntime;
#[cfg(feature = "blocking")]
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

/// Facade for sending SMS messages and checking the account credit.
///
/// By default the facade is bound to the CPSMS gateway. Every method issues
/// exactly one request through the underlying [`SmsSender`]; nothing is
/// retried.
///
/// Two call styles are offered:
/// - `*_async` methods are plain futures and should be preferred.
/// - Blocking methods (feature `blocking`, on by default) run the operation
///   on a dedicated worker thread with its own runtime, through a separate
///   sender whose connections are never driven by the caller's executor.
///   They park the calling thread until the request finishes.
///
/// # Type Parameters
///
/// - `S`: The sender implementation (defaults to [`CpSmsClient`])
///
/// # Example
///
/// ```rust,ignore
/// use sportstiming_sms::SportstimingSms;
///
/// let sms = SportstimingSms::new("username", "api_key")?;
///
/// // Async
/// let result = sms.send_sms_async("Hello", "Sportstiming", "4512345678").await?;
/// println!("CPSMS replied: {}", result);
///
/// // Blocking
/// let credit = sms.check_credit()?;
/// println!("Credit left: {}", credit);
/// ```
#[derive(Debug, Clone)]
pub struct SportstimingSms<S: SmsSender = CpSmsClient> {
    sender: S,
    #[cfg(feature = "blocking")]
    blocking_sender: S,
    #[cfg(feature = "blocking")]
    blocking: Arc<BlockingRuntime>,
}

impl SportstimingSms<CpSmsClient> {
    /// Create a facade bound to CPSMS with default settings.
    ///
    /// # Arguments
    /// * `username` - CPSMS username
    /// * `api_key` - CPSMS API key
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, SmsServiceError> {
        Self::from_config(CpSmsConfig::new(username, api_key))
    }

    /// Create a facade bound to CPSMS with a custom configuration.
    ///
    /// With the `blocking` feature two clients are built from `config`, one
    /// per call style, so they never share pooled connections.
    pub fn from_config(config: CpSmsConfig) -> Result<Self, SmsServiceError> {
        #[cfg(feature = "blocking")]
        {
            let blocking_sender =
                CpSmsClient::from_config(config.clone()).map_err(SmsServiceError::sender)?;
            let sender = CpSmsClient::from_config(config).map_err(SmsServiceError::sender)?;
            Ok(Self::with_senders(sender, blocking_sender))
        }

        #[cfg(not(feature = "blocking"))]
        {
            let sender = CpSmsClient::from_config(config).map_err(SmsServiceError::sender)?;
            Ok(Self::with_sender(sender))
        }
    }

    /// Create a facade bound to CPSMS from `CPSMS_*` environment variables.
    ///
    /// See [`CpSmsConfig::from_env`].
    pub fn from_env() -> Result<Self, SmsServiceError> {
        let config = CpSmsConfig::from_env().map_err(SmsServiceError::sender)?;
        Self::from_config(config)
    }
}

impl<S: SmsSender> SportstimingSms<S> {
    /// Create a facade over any sender implementation.
    ///
    /// Blocking calls go through a clone of `sender`. If clones share a
    /// connection pool (as [`CpSmsClient`] clones do), calling a blocking
    /// method from a single-threaded runtime that also made async calls can
    /// stall on a connection owned by that runtime. Use `with_senders` with
    /// two independent instances in that case.
    pub fn with_sender(sender: S) -> Self
    where
        S: Clone,
    {
        #[cfg(feature = "blocking")]
        {
            Self::with_senders(sender.clone(), sender)
        }

        #[cfg(not(feature = "blocking"))]
        {
            Self { sender }
        }
    }

    /// Get reference to the underlying sender.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Send a message to a single recipient.
    ///
    /// # Arguments
    /// * `message` - The body text of the SMS
    /// * `from` - Sender id seen by the receiver
    /// * `to` - Receiving number, starting with the country code
    ///
    /// # Returns
    /// The raw gateway response body.
    pub async fn send_sms_async(
        &self,
        message: &str,
        from: &str,
        to: &str,
    ) -> Result<SendResult, SmsServiceError> {
        send_sms_via(&self.sender, message, from, to).await
    }

    /// Send a message to several recipients in one request.
    pub async fn send_group_sms_async(
        &self,
        message: &str,
        from: &str,
        to: &[String],
    ) -> Result<SendResult, SmsServiceError> {
        send_group_sms_via(&self.sender, message, from, to).await
    }

    /// Check the remaining account credit.
    ///
    /// Returns the `credit` field of the gateway response as text, e.g.
    /// `"9.843,40"`. The value is locale formatted by the vendor and is not
    /// converted to a number.
    pub async fn check_credit_async(&self) -> Result<Credit, SmsServiceError> {
        check_credit_via(&self.sender).await
    }
}

#[cfg(feature = "blocking")]
impl<S: SmsSender> SportstimingSms<S> {
    /// Create a facade with a separate sender for the blocking calls.
    ///
    /// `blocking_sender` is only ever driven by the facade's worker runtime.
    pub fn with_senders(sender: S, blocking_sender: S) -> Self {
        Self {
            sender,
            blocking_sender,
            blocking: Arc::new(BlockingRuntime::default()),
        }
    }

    /// Blocking form of [`send_sms_async`](Self::send_sms_async).
    pub fn send_sms(
        &self,
        message: &str,
        from: &str,
        to: &str,
    ) -> Result<SendResult, SmsServiceError> {
        self.blocking
            .run(send_sms_via(&self.blocking_sender, message, from, to))
    }

    /// Blocking form of [`send_group_sms_async`](Self::send_group_sms_async).
    pub fn send_group_sms(
        &self,
        message: &str,
        from: &str,
        to: &[String],
    ) -> Result<SendResult, SmsServiceError> {
        self.blocking
            .run(send_group_sms_via(&self.blocking_sender, message, from, to))
    }

    /// Blocking form of [`check_credit_async`](Self::check_credit_async).
    pub fn check_credit(&self) -> Result<Credit, SmsServiceError> {
        self.blocking.run(check_credit_via(&self.blocking_sender))
    }
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "sportstiming_sms.send_sms", skip_all)
)]
async fn send_sms_via<S: SmsSender>(
    sender: &S,
    message: &str,
    from: &str,
    to: &str,
) -> Result<SendResult, SmsServiceError> {
    let result = sender
        .send_sms(message, from, to)
        .await
        .map_err(SmsServiceError::sender)?;

    #[cfg(feature = "tracing")]
    info!("SMS sent");

    Ok(result)
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "sportstiming_sms.send_group_sms",
        skip_all,
        fields(recipients = to.len())
    )
)]
async fn send_group_sms_via<S: SmsSender>(
    sender: &S,
    message: &str,
    from: &str,
    to: &[String],
) -> Result<SendResult, SmsServiceError> {
    let result = sender
        .send_group_sms(message, from, to)
        .await
        .map_err(SmsServiceError::sender)?;

    #[cfg(feature = "tracing")]
    info!("Group SMS sent");

    Ok(result)
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "sportstiming_sms.check_credit", skip_all)
)]
async fn check_credit_via<S: SmsSender>(sender: &S) -> Result<Credit, SmsServiceError> {
    let body = sender
        .check_balance()
        .await
        .map_err(SmsServiceError::sender)?;

    let credit = parse_credit(&body)?;

    #[cfg(feature = "tracing")]
    debug!(credit = %credit, "Credit checked");

    Ok(credit)
}
