//! CPSMS gateway implementation.
//!
//! This module provides integration with the CPSMS REST API
//! (<https://api.cpsms.dk/documentation>) for sending SMS messages and
//! checking the account credit.
//!
//! # Example
//!
//! ```rust,ignore
//! use sportstiming_sms::SmsSender;
//! use sportstiming_sms::cpsms::{CpSmsClient, CpSmsConfig};
//! use std::time::Duration;
//!
//! let config = CpSmsConfig::builder("username", "api_key")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! let client = CpSmsClient::from_config(config)?;
//!
//! let body = client
//!     .send_group_sms("Race starts at 10", "Sportstiming", &numbers)
//!     .await?;
//! println!("CPSMS replied: {}", body);
//! ```

pub mod client;
pub mod config;
pub mod errors;
mod sender;
pub mod types;

// Re-export commonly used types
pub use client::{CpSmsClient, CpSmsClientBuilder};
pub use config::{CpSmsConfig, CpSmsConfigBuilder, DEFAULT_BASE_URL};
pub use errors::CpSmsError;
pub use types::AuthEncoding;
