//! # Sportstiming SMS
//!
//! A small client library for sending SMS messages and checking the account
//! credit through the CPSMS gateway.
//!
//! The gateway is reached through the [`SmsSender`] trait, so callers are not
//! tied to the vendor. One implementation exists today.
//!
//! ## Supported Gateways
//!
//! | Gateway | Type | Website |
//! |---------|------|---------|
//! | CPSMS | [`cpsms::CpSmsClient`] | <https://www.cpsms.dk> |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sportstiming_sms::SportstimingSms;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sms = SportstimingSms::new("username", "api_key")?;
//!
//!     // Send to one recipient (numbers start with the country code)
//!     let result = sms.send_sms_async("Hello", "Sportstiming", "4512345678").await?;
//!     println!("CPSMS replied: {}", result);
//!
//!     // Send the same text to a group
//!     let numbers = vec!["4511111111".to_string(), "4522222222".to_string()];
//!     sms.send_group_sms_async("Race starts at 10", "Sportstiming", &numbers).await?;
//!
//!     // Check the remaining credit, e.g. "9.843,40"
//!     let credit = sms.check_credit_async().await?;
//!     println!("Credit left: {}", credit);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! SportstimingSms<S>   (facade: async + blocking, credit parsing)
//!         │
//!         ▼
//!     SmsSender        (trait: CpSmsClient, ...)
//!         │
//!         ▼
//!   CPSMS REST API     (send, sendgroup, creditvalue)
//! ```
//!
//! Send results are the raw response bodies. Vendor errors encoded in those
//! bodies are not interpreted, and nothing is retried.
//!
//! ## Features
//!
//! - `tracing` - OpenTelemetry tracing instrumentation (enabled by default)
//! - `blocking` - blocking facade methods run on a worker thread (enabled by default)

#![forbid(unsafe_code)]

pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

// Re-export commonly used types at the crate root
pub use errors::{ClassifiedError, ErrorKind};
pub use providers::SmsSender;
pub use providers::cpsms;
pub use service::{SmsServiceError, SportstimingSms};
pub use types::{Credit, SendResult};
