//! SMS gateway implementations.

pub(crate) mod traits;

pub mod cpsms;

pub use traits::SmsSender;
