//! Sender trait definition.

use crate::errors::ClassifiedError;
use crate::types::SendResult;
use std::error::Error as StdError;
use std::future::Future;

/// Core trait that every SMS gateway must implement.
///
/// This trait defines the operations the facade needs from a gateway:
/// - Sending one message to a single recipient
/// - Sending one message to a group of recipients in a single request
/// - Checking the remaining account balance
///
/// Recipients are expected to start with a country code. Implementations
/// validate their arguments before performing any network I/O and return
/// the raw response body, leaving vendor-specific interpretation to the
/// caller.
///
/// # Note on async methods
///
/// All async methods in this trait return `Send` futures, making them
/// compatible with multi-threaded executors.
///
/// # Example
///
/// ```rust,ignore
/// use sportstiming_sms::{SendResult, SmsSender};
///
/// #[derive(Clone)]
/// struct MyGateway { /* ... */ }
///
/// impl SmsSender for MyGateway {
///     type Error = MyError;
///
///     async fn send_sms(&self, message: &str, from: &str, to: &str) -> Result<SendResult, Self::Error> {
///         // POST a single message
///     }
///
///     async fn send_group_sms(&self, message: &str, from: &str, to: &[String]) -> Result<SendResult, Self::Error> {
///         // POST a group message
///     }
///
///     async fn check_balance(&self) -> Result<String, Self::Error> {
///         // GET the account balance
///     }
/// }
/// ```
pub trait SmsSender: Send + Sync {
    /// Error type returned by sender operations.
    type Error: StdError + ClassifiedError + Send + Sync + 'static;

    /// Send a message to a single recipient.
    ///
    /// # Arguments
    /// * `message` - The body text of the SMS
    /// * `from` - Sender id seen by the receiver (max 15 digits or 11 alphanumeric characters)
    /// * `to` - Receiving number, starting with the country code
    ///
    /// # Returns
    /// The raw gateway response body.
    fn send_sms(
        &self,
        message: &str,
        from: &str,
        to: &str,
    ) -> impl Future<Output = Result<SendResult, Self::Error>> + Send;

    /// Send the same message to several recipients in one request.
    ///
    /// Recipient order is preserved in the outgoing request. An empty list is
    /// rejected before any network I/O.
    fn send_group_sms(
        &self,
        message: &str,
        from: &str,
        to: &[String],
    ) -> impl Future<Output = Result<SendResult, Self::Error>> + Send;

    /// Request the remaining account balance.
    ///
    /// # Returns
    /// The raw response body, expected to be a JSON object with a `credit` field.
    fn check_balance(&self) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
